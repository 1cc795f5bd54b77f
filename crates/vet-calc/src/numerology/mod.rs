//! Numerology: digit reduction, letter values, and the seven-number
//! profile computed from a birthdate and a full name.

pub mod letters;
pub mod meanings;
pub mod profile;
pub mod reduce;
pub mod session;

pub use letters::{LetterSet, letter_value};
pub use meanings::NumberKind;
pub use profile::{Birthdate, NumerologyProfile};
pub use reduce::{digit_sum, is_master, reduce};
pub use session::NumerologySession;

//! I-Ching: three-coin casting, hexagram composition, and lookup tables.
//!
//! Lines are cast bottom (1) to top (6). A hexagram's binary string reads
//! the same way: index 0 is the bottom line, `1` for yang, `0` for yin.
//! The first three characters are the lower trigram, the last three the
//! upper trigram.

pub mod line;
pub mod reading;
pub mod session;
pub mod table;
pub mod trigram;

pub use line::{LineCast, LineValue, cast_line};
pub use reading::{Hexagram, Reading};
pub use session::IChingSession;
pub use table::{HexagramInfo, lookup_hexagram};
pub use trigram::Trigram;

//! Esoteric calculators for the Virtual Esoteric Toolkit.
//!
//! - [`numerology`]: digit reduction, Pythagorean letter tables, and the
//!   seven-number profile.
//! - [`sigil`]: consonant extraction from a written intention.
//! - [`astro`]: a low-precision analytic ephemeris behind the
//!   [`astro::Ephemeris`] trait, with the birth chart, planetary position,
//!   and moon phase tools built on it.

pub mod astro;
pub mod error;
pub mod numerology;
pub mod sigil;

pub use astro::{
    AnalyticEphemeris, BirthChartSession, Body, Ephemeris, MoonPhase, MoonPhaseSession, Observer,
    PositionsSession, ZodiacSign,
};
pub use error::{AstroError, AstroResult, CalcError, CalcResult};
pub use numerology::{Birthdate, NumberKind, NumerologyProfile, NumerologySession, reduce};
pub use sigil::{SigilSession, extract_consonants};

//! Astronomy for the chart, positions, and moon phase tools.
//!
//! Positions come from an [`Ephemeris`]. The built-in
//! [`AnalyticEphemeris`] uses mean Keplerian elements for the planets and
//! a truncated lunar series for the Moon, good to a fraction of a degree
//! between 1800 and 2100. All positions are in the J2000 ecliptic frame;
//! times are UTC.

pub mod body;
pub mod chart;
pub mod coords;
pub mod ephemeris;
pub mod kepler;
pub mod moon;
pub mod phase;
pub mod positions;
pub mod time;
pub mod zodiac;

pub use body::Body;
pub use chart::{BirthChart, BirthChartSession, Placement, ascendant_deg};
pub use coords::{Cartesian, Equatorial};
pub use ephemeris::{AnalyticEphemeris, Ephemeris, Observer};
pub use phase::{MoonPhase, MoonPhaseSession, moon_phase_on};
pub use positions::{BodyPosition, PositionsSession, positions_at};
pub use zodiac::ZodiacSign;

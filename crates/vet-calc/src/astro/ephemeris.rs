//! The ephemeris seam and its built-in analytic implementation.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::coords::Cartesian;
use super::time::{centuries_since_j2000, julian_day};
use super::{kepler, moon};
use crate::error::{AstroError, AstroResult};

/// Answers "where is body B at time T" in the J2000 ecliptic frame, AU.
pub trait Ephemeris {
    /// Position relative to the Sun.
    fn heliocentric(&self, body: Body, at: DateTime<Utc>) -> AstroResult<Cartesian>;

    /// Position relative to the Earth.
    fn geocentric(&self, body: Body, at: DateTime<Utc>) -> AstroResult<Cartesian> {
        if body == Body::Earth {
            return Err(AstroError::Unsupported {
                body: Body::Earth.name(),
                frame: "geocentric",
            });
        }
        Ok(self.heliocentric(body, at)? - self.heliocentric(Body::Earth, at)?)
    }
}

/// Keplerian planets plus a truncated lunar series.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    /// First supported year.
    pub const MIN_YEAR: i32 = 1800;
    /// Last supported year.
    pub const MAX_YEAR: i32 = 2100;

    /// Create the ephemeris.
    pub fn new() -> Self {
        Self
    }

    fn centuries(at: DateTime<Utc>) -> AstroResult<f64> {
        let year = at.year();
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(AstroError::EpochOutOfRange {
                year,
                min: Self::MIN_YEAR,
                max: Self::MAX_YEAR,
            });
        }
        Ok(centuries_since_j2000(julian_day(at)))
    }

    fn earth(t: f64) -> Cartesian {
        kepler::EARTH_MOON_ELEMENTS.position(t)
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn heliocentric(&self, body: Body, at: DateTime<Utc>) -> AstroResult<Cartesian> {
        let t = Self::centuries(at)?;
        let position = match body {
            Body::Sun => Cartesian::default(),
            Body::Moon => Self::earth(t) + moon::geocentric(t),
            other => match kepler::elements(other) {
                Some(el) => el.position(t),
                None => {
                    return Err(AstroError::Unsupported {
                        body: other.name(),
                        frame: "heliocentric",
                    });
                }
            },
        };
        Ok(position)
    }

    fn geocentric(&self, body: Body, at: DateTime<Utc>) -> AstroResult<Cartesian> {
        let t = Self::centuries(at)?;
        match body {
            Body::Moon => Ok(moon::geocentric(t)),
            Body::Sun => Ok(-Self::earth(t)),
            Body::Earth => Err(AstroError::Unsupported {
                body: body.name(),
                frame: "geocentric",
            }),
            other => Ok(self.heliocentric(other, at)? - Self::earth(t)),
        }
    }
}

/// A place on Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Geodetic latitude, degrees north.
    pub latitude: f64,
    /// Longitude, degrees east.
    pub longitude: f64,
}

impl Observer {
    /// Validate and build an observer.
    pub fn new(latitude: f64, longitude: f64) -> AstroResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AstroError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AstroError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

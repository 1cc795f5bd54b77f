//! Rectangular coordinates and frame conversions.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Mean obliquity of the ecliptic at J2000.0, degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291;

/// A position in the J2000 ecliptic frame, AU.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian {
    /// Towards the vernal equinox.
    pub x: f64,
    /// 90 degrees east along the ecliptic.
    pub y: f64,
    /// Towards the north ecliptic pole.
    pub z: f64,
}

/// Right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in hours, range [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl Cartesian {
    /// Build from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build from ecliptic longitude and latitude (degrees) and distance.
    pub fn from_spherical(lon_deg: f64, lat_deg: f64, distance: f64) -> Self {
        let (lon, lat) = (lon_deg.to_radians(), lat_deg.to_radians());
        Self {
            x: distance * lat.cos() * lon.cos(),
            y: distance * lat.cos() * lon.sin(),
            z: distance * lat.sin(),
        }
    }

    /// Distance from the origin.
    pub fn distance(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Ecliptic longitude in degrees, range [0, 360).
    pub fn longitude_deg(&self) -> f64 {
        self.y.atan2(self.x).to_degrees().rem_euclid(360.0)
    }

    /// Ecliptic latitude in degrees.
    pub fn latitude_deg(&self) -> f64 {
        self.z.atan2(self.x.hypot(self.y)).to_degrees()
    }

    /// Rotate into the J2000 equator and return RA/Dec.
    pub fn to_equatorial(&self) -> Equatorial {
        let eps = OBLIQUITY_J2000_DEG.to_radians();
        let (sin_e, cos_e) = eps.sin_cos();
        let x = self.x;
        let y = self.y * cos_e - self.z * sin_e;
        let z = self.y * sin_e + self.z * cos_e;
        Equatorial {
            ra_hours: y.atan2(x).to_degrees().rem_euclid(360.0) / 15.0,
            dec_deg: z.atan2(x.hypot(y)).to_degrees(),
        }
    }
}

impl Add for Cartesian {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Cartesian {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Cartesian {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

//! Julian dates and sidereal time.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of a UTC instant.
///
/// UTC is used in place of TT; the 69-second difference is far below the
/// precision of the analytic ephemeris.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    let seconds = at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) * 1e-9;
    seconds / 86_400.0 + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// Meeus, Astronomical Algorithms, eq. 12.4.
pub fn gmst_deg(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Local sidereal time in degrees for an east longitude, range [0, 360).
pub fn local_sidereal_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_east_deg).rem_euclid(360.0)
}

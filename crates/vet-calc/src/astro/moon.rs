//! Geocentric Moon from the Astronomical Almanac low-precision series.
//!
//! Good to about 0.3 degrees in longitude. The series gives longitude of
//! date; general precession is removed to land in the J2000 frame.

use super::coords::Cartesian;

/// Earth's equatorial radius, km.
const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Astronomical unit, km.
const AU_KM: f64 = 149_597_870.7;

/// Precession in longitude per Julian century, degrees.
const PRECESSION_DEG_PER_CENTURY: f64 = 1.396_971;

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Ecliptic longitude of date, degrees.
fn longitude_of_date(t: f64) -> f64 {
    218.32 + 481_267.881 * t + 6.29 * sin_deg(135.0 + 477_198.87 * t)
        - 1.27 * sin_deg(259.3 - 413_335.36 * t)
        + 0.66 * sin_deg(235.7 + 890_534.22 * t)
        + 0.21 * sin_deg(269.9 + 954_397.74 * t)
        - 0.19 * sin_deg(357.5 + 35_999.05 * t)
        - 0.11 * sin_deg(186.5 + 966_404.03 * t)
}

/// Ecliptic latitude, degrees.
fn latitude(t: f64) -> f64 {
    5.13 * sin_deg(93.3 + 483_202.02 * t) + 0.28 * sin_deg(228.2 + 960_400.89 * t)
        - 0.28 * sin_deg(318.3 + 6_003.15 * t)
        - 0.17 * sin_deg(217.6 - 407_332.21 * t)
}

/// Horizontal parallax, degrees.
fn parallax(t: f64) -> f64 {
    0.9508
        + 0.0518 * cos_deg(135.0 + 477_198.87 * t)
        + 0.0095 * cos_deg(259.3 - 413_335.36 * t)
        + 0.0078 * cos_deg(235.7 + 890_534.22 * t)
        + 0.0028 * cos_deg(269.9 + 954_397.74 * t)
}

/// Geocentric J2000 ecliptic position `t` Julian centuries after J2000.0,
/// in AU.
pub fn geocentric(t: f64) -> Cartesian {
    let lon = (longitude_of_date(t) - PRECESSION_DEG_PER_CENTURY * t).rem_euclid(360.0);
    let distance_km = EARTH_RADIUS_KM / sin_deg(parallax(t));
    Cartesian::from_spherical(lon, latitude(t), distance_km / AU_KM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_stays_in_lunar_range() {
        for i in 0..200 {
            let t = f64::from(i) * 0.0005;
            let km = geocentric(t).distance() * AU_KM;
            assert!((356_000.0..407_500.0).contains(&km), "{km} km at t={t}");
        }
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for i in 0..200 {
            let t = f64::from(i) * 0.0003 - 0.03;
            assert!(geocentric(t).latitude_deg().abs() < 5.4);
        }
    }

    #[test]
    fn j2000_longitude() {
        // Meeus gives 223.3 degrees apparent for 2000-01-01 12:00 TT.
        let lon = geocentric(0.0).longitude_deg();
        assert!((lon - 223.3).abs() < 0.6, "{lon}");
    }
}

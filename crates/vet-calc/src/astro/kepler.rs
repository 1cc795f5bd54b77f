//! Heliocentric planet positions from mean orbital elements.
//!
//! Elements and rates per Julian century are the JPL "approximate
//! positions of the planets" set (Standish), valid 1800 to 2050 and
//! usable with slowly growing error beyond. Earth uses the Earth-Moon
//! barycenter elements.

use std::f64::consts::PI;

use super::body::Body;
use super::coords::Cartesian;

/// Mean elements at J2000 with their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis, AU.
    pub a: [f64; 2],
    /// Eccentricity.
    pub e: [f64; 2],
    /// Inclination, degrees.
    pub i: [f64; 2],
    /// Mean longitude, degrees.
    pub l: [f64; 2],
    /// Longitude of perihelion, degrees.
    pub peri: [f64; 2],
    /// Longitude of the ascending node, degrees.
    pub node: [f64; 2],
}

#[rustfmt::skip]
const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.387_099_27, 0.000_000_37], e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49], l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89], node: [48.330_765_93, -0.125_340_81],
};
#[rustfmt::skip]
const VENUS: OrbitalElements = OrbitalElements {
    a: [0.723_335_66, 0.000_003_90], e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90], l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29], node: [76.679_842_55, -0.277_694_18],
};
/// Earth-Moon barycenter, used for Earth.
#[rustfmt::skip]
pub const EARTH_MOON_ELEMENTS: OrbitalElements = OrbitalElements {
    a: [1.000_002_61, 0.000_005_62], e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68], l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64], node: [0.0, 0.0],
};
#[rustfmt::skip]
const MARS: OrbitalElements = OrbitalElements {
    a: [1.523_710_34, 0.000_018_47], e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31], l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88], node: [49.559_538_91, -0.292_573_43],
};
#[rustfmt::skip]
const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.202_887_00, -0.000_116_07], e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14], l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68], node: [100.473_909_09, 0.204_691_06],
};
#[rustfmt::skip]
const SATURN: OrbitalElements = OrbitalElements {
    a: [9.536_675_94, -0.001_250_60], e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09], l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16], node: [113.662_424_48, -0.288_677_94],
};
#[rustfmt::skip]
const URANUS: OrbitalElements = OrbitalElements {
    a: [19.189_164_64, -0.001_961_76], e: [0.047_257_44, -0.000_043_97],
    i: [0.772_637_83, -0.002_429_39], l: [313.238_104_51, 428.482_027_85],
    peri: [170.954_276_30, 0.408_052_81], node: [74.016_925_03, 0.042_405_89],
};
#[rustfmt::skip]
const NEPTUNE: OrbitalElements = OrbitalElements {
    a: [30.069_922_76, 0.000_262_91], e: [0.008_590_48, 0.000_051_05],
    i: [1.770_043_47, 0.000_353_72], l: [-55.120_029_69, 218.459_453_25],
    peri: [44.964_762_27, -0.322_414_64], node: [131.784_225_74, -0.005_086_64],
};
#[rustfmt::skip]
const PLUTO: OrbitalElements = OrbitalElements {
    a: [39.482_116_75, -0.000_315_96], e: [0.248_827_30, 0.000_051_70],
    i: [17.140_012_06, 0.000_048_18], l: [238.929_038_33, 145.207_805_15],
    peri: [224.068_916_29, -0.040_629_42], node: [110.303_936_84, -0.011_834_82],
};

/// Elements for a body on a heliocentric orbit. `None` for the Sun and Moon.
pub fn elements(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Earth => Some(&EARTH_MOON_ELEMENTS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` for the eccentric anomaly.
/// Angles in radians.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..50 {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

impl OrbitalElements {
    /// Heliocentric J2000 ecliptic position `t` Julian centuries after
    /// J2000.0.
    pub fn position(&self, t: f64) -> Cartesian {
        let at = |pair: [f64; 2]| pair[0] + pair[1] * t;
        let a = at(self.a);
        let e = at(self.e);
        let incl = at(self.i).to_radians();
        let peri = at(self.peri);
        let node_deg = at(self.node);
        let arg = (peri - node_deg).to_radians();
        let node = node_deg.to_radians();

        let mean = (at(self.l) - peri).to_radians();
        let mean = (mean + PI).rem_euclid(2.0 * PI) - PI;
        let ecc = solve_kepler(mean, e);

        let xp = a * (ecc.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

        let (sw, cw) = arg.sin_cos();
        let (so, co) = node.sin_cos();
        let (si, ci) = incl.sin_cos();
        Cartesian::new(
            (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
            (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        )
    }
}

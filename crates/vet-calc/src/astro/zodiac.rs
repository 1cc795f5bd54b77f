//! Tropical zodiac signs, 30 degrees each from the vernal equinox.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the twelve signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    /// 0 to 30 degrees.
    Aries,
    /// 30 to 60 degrees.
    Taurus,
    /// 60 to 90 degrees.
    Gemini,
    /// 90 to 120 degrees.
    Cancer,
    /// 120 to 150 degrees.
    Leo,
    /// 150 to 180 degrees.
    Virgo,
    /// 180 to 210 degrees.
    Libra,
    /// 210 to 240 degrees.
    Scorpio,
    /// 240 to 270 degrees.
    Sagittarius,
    /// 270 to 300 degrees.
    Capricorn,
    /// 300 to 330 degrees.
    Aquarius,
    /// 330 to 360 degrees.
    Pisces,
}

impl ZodiacSign {
    /// All signs from Aries.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// The sign containing an ecliptic longitude in degrees.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let index = (longitude_deg.rem_euclid(360.0) / 30.0).floor() as usize;
        Self::ALL[index % 12]
    }

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sign symbol.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(280.46), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_longitude(359.99), ZodiacSign::Pisces);
    }

    #[test]
    fn wraps_out_of_range_longitudes() {
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-10.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(725.0), ZodiacSign::Aries);
    }

    #[test]
    fn display_with_glyph() {
        assert_eq!(ZodiacSign::Capricorn.to_string(), "Capricorn ♑");
        assert_eq!(ZodiacSign::Pisces.to_string(), "Pisces ♓");
    }
}

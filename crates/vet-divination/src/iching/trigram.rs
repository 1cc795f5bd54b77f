//! The eight trigrams.

use serde::{Deserialize, Serialize};

/// One of the eight three-line trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ Qian, three solid lines.
    Heaven,
    /// ☱ Dui, broken top line.
    Lake,
    /// ☲ Li, broken middle line.
    Fire,
    /// ☳ Zhen, solid bottom line.
    Thunder,
    /// ☴ Xun, broken bottom line.
    Wind,
    /// ☵ Kan, solid middle line.
    Water,
    /// ☶ Gen, solid top line.
    Mountain,
    /// ☷ Kun, three broken lines.
    Earth,
}

impl Trigram {
    /// All eight trigrams.
    pub const ALL: [Trigram; 8] = [
        Trigram::Heaven,
        Trigram::Lake,
        Trigram::Fire,
        Trigram::Thunder,
        Trigram::Wind,
        Trigram::Water,
        Trigram::Mountain,
        Trigram::Earth,
    ];

    /// Lines bottom-to-top, `1` for solid.
    pub fn binary(self) -> &'static str {
        match self {
            Self::Heaven => "111",
            Self::Lake => "110",
            Self::Fire => "101",
            Self::Thunder => "100",
            Self::Wind => "011",
            Self::Water => "010",
            Self::Mountain => "001",
            Self::Earth => "000",
        }
    }

    /// The trigram for a three-character bottom-to-top string.
    pub fn from_binary(binary: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.binary() == binary)
    }

    /// Image, name, and qualities.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::Heaven => "Heaven (Qian) - Creative, Strong",
            Self::Lake => "Lake (Dui) - Joyous, Open",
            Self::Fire => "Fire (Li) - Clinging, Bright",
            Self::Thunder => "Thunder (Zhen) - Arousing, Active",
            Self::Wind => "Wind (Xun) - Gentle, Penetrating",
            Self::Water => "Water (Kan) - Abysmal, Dangerous",
            Self::Mountain => "Mountain (Gen) - Still, Resting",
            Self::Earth => "Earth (Kun) - Receptive, Yielding",
        }
    }
}

/// Look up a trigram meaning, `"Unknown"` for anything but a valid string.
pub fn trigram_meaning(binary: &str) -> &'static str {
    Trigram::from_binary(binary).map_or("Unknown", Trigram::meaning)
}

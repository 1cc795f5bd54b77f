//! Three-coin line casting.
//!
//! Each coin counts 3 for heads and 2 for tails, so three coins sum to
//! 6, 7, 8, or 9 with probabilities 1/8, 3/8, 3/8, 1/8.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::coin::{CoinFace, toss};

/// The value of a single cast line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineValue {
    /// 6: broken, changing yin.
    OldYin,
    /// 7: solid, static yang.
    YoungYang,
    /// 8: broken, static yin.
    YoungYin,
    /// 9: solid, changing yang.
    OldYang,
}

impl LineValue {
    /// The line for a numeric value in 6..=9.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// The numeric value, 6 to 9.
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Solid lines (7 and 9).
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Changing lines (6 and 9).
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The line after change: 6 becomes 7, 9 becomes 8, others stay.
    pub fn settled(self) -> Self {
        match self {
            Self::OldYin => Self::YoungYang,
            Self::OldYang => Self::YoungYin,
            other => other,
        }
    }

    /// ASCII glyph; changing lines carry an `x` or `o` marker.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::OldYin => "-- --x",
            Self::YoungYang => "-----",
            Self::YoungYin => "-- --",
            Self::OldYang => "-----o",
        }
    }

    /// Binary digit used in hexagram strings.
    pub fn bit(self) -> char {
        if self.is_yang() { '1' } else { '0' }
    }
}

/// One line's worth of coin tosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCast {
    /// The three coins, in the order tossed.
    pub coins: [CoinFace; 3],
}

impl LineCast {
    /// The line the coins produce.
    pub fn value(&self) -> LineValue {
        let sum: u8 = self.coins.iter().map(|c| c.weight()).sum();
        match sum {
            6 => LineValue::OldYin,
            7 => LineValue::YoungYang,
            8 => LineValue::YoungYin,
            _ => LineValue::OldYang,
        }
    }

    /// e.g. `Heads (3) + Tails (2) + Heads (3) = 8`.
    pub fn describe(&self) -> String {
        let coins: Vec<String> = self
            .coins
            .iter()
            .map(|c| format!("{c} ({})", c.weight()))
            .collect();
        format!("{} = {}", coins.join(" + "), self.value().value())
    }
}

/// Toss three coins for one line.
pub fn cast_line(rng: &mut StdRng) -> LineCast {
    let coins = [toss(rng), toss(rng), toss(rng)];
    let cast = LineCast { coins };
    tracing::trace!(value = cast.value().value(), "cast line");
    cast
}

//! Dice types, notation, and the dice set session.
//!
//! Supports the six polyhedral dice of a standard set, d4 through d20.
//! Selections are written as comma-separated `dN(count)` groups, e.g.
//! `d6(2),d20(1)`.

pub mod notation;
pub mod roll;
pub mod session;

pub use notation::{DiceGroup, DiceSelection};
pub use roll::GroupRoll;
pub use session::DiceSession;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DivinationError;

/// Upper bound on the count in a single `dN(count)` group.
pub const MAX_DICE_PER_GROUP: u32 = 100;

/// One die of the standard polyhedral set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Die {
    /// Tetrahedron.
    D4,
    /// Cube.
    D6,
    /// Octahedron.
    D8,
    /// Pentagonal trapezohedron.
    D10,
    /// Dodecahedron.
    D12,
    /// Icosahedron.
    D20,
}

impl Die {
    /// The set, smallest first.
    pub const ALL: [Self; 6] = [Self::D4, Self::D6, Self::D8, Self::D10, Self::D12, Self::D20];

    /// Face count.
    pub const fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }
}

/// Accepts `d6`, `D20`, or ` d10 `. Anything outside the set is
/// [`DivinationError::InvalidDice`].
impl FromStr for Die {
    type Err = DivinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|die| die.to_string().eq_ignore_ascii_case(tag))
            .ok_or_else(|| DivinationError::InvalidDice(tag.to_string()))
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_standard_set() {
        assert_eq!("d20".parse(), Ok(Die::D20));
        assert_eq!("D6".parse(), Ok(Die::D6));
        assert_eq!(" d10 ".parse(), Ok(Die::D10));
        for die in Die::ALL {
            assert_eq!(die.to_string().parse(), Ok(die));
        }
    }

    #[test]
    fn rejects_dice_outside_the_set() {
        for tag in ["d7", "d100", "d06", "6", "foo"] {
            assert_eq!(
                tag.parse::<Die>(),
                Err(DivinationError::InvalidDice(tag.to_string())),
            );
        }
    }

    #[test]
    fn serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Die::D12).unwrap(), "\"d12\"");
    }
}

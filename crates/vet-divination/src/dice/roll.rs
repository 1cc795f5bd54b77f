//! Rolled dice groups.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use super::notation::DiceGroup;

/// The faces one group came up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRoll {
    /// The group that was rolled.
    pub group: DiceGroup,
    /// One value per die, each in `1..=sides`.
    pub values: Vec<u32>,
}

impl GroupRoll {
    /// Roll every die of `group`.
    pub fn roll(group: DiceGroup, rng: &mut StdRng) -> Self {
        let sides = group.die.sides();
        let values = (0..group.count)
            .map(|_| rng.random_range(1..=sides))
            .collect();
        Self { group, values }
    }

    /// Sum of the faces.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }
}

/// `2 x d6: [3, 5] (Total: 8)`
impl fmt::Display for GroupRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        write!(
            f,
            "{} x {}: [{}] (Total: {})",
            self.group.count,
            self.group.die,
            values.join(", "),
            self.total()
        )
    }
}

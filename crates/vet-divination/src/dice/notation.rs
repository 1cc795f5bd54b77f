//! Dice notation: comma-separated `dN(count)` groups.

use rand::rngs::StdRng;

use super::roll::GroupRoll;
use super::{Die, MAX_DICE_PER_GROUP};
use crate::error::{DivinationError, DivinationResult};

/// `count` dice of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceGroup {
    /// The die type.
    pub die: Die,
    /// How many of them to roll.
    pub count: u32,
}

impl DiceGroup {
    /// Parse one `dN(count)` group.
    pub fn parse(part: &str) -> DivinationResult<Self> {
        let part = part.trim();
        let (die_tag, rest) = part
            .split_once('(')
            .ok_or_else(|| DivinationError::MalformedGroup(part.to_string()))?;
        let count_str = rest
            .strip_suffix(')')
            .ok_or_else(|| DivinationError::MalformedGroup(part.to_string()))?;

        let die: Die = die_tag.parse()?;
        let count = count_str
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| (1..=MAX_DICE_PER_GROUP).contains(n))
            .ok_or_else(|| DivinationError::InvalidCount(count_str.trim().to_string()))?;

        Ok(Self { die, count })
    }

    /// Roll this group.
    pub fn roll(self, rng: &mut StdRng) -> GroupRoll {
        GroupRoll::roll(self, rng)
    }
}

/// An ordered list of dice groups chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSelection {
    /// Groups in the order they were written.
    pub groups: Vec<DiceGroup>,
}

impl DiceSelection {
    /// Parse notation like `d6(2),d20(1)`. Case and whitespace are ignored.
    pub fn parse(input: &str) -> DivinationResult<Self> {
        if input.trim().is_empty() {
            return Err(DivinationError::EmptySelection);
        }
        let groups = input
            .split(',')
            .map(DiceGroup::parse)
            .collect::<DivinationResult<Vec<_>>>()?;
        Ok(Self { groups })
    }

    /// Total number of dice across all groups.
    pub fn dice_count(&self) -> u32 {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Roll every group once, in order.
    pub fn roll(&self, rng: &mut StdRng) -> Vec<GroupRoll> {
        self.groups.iter().map(|g| g.roll(rng)).collect()
    }
}

//! Draw pools with and without replacement.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{DivinationError, DivinationResult};

/// Whether drawn items go back into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Drawn items are removed until the pool is empty.
    Limited,
    /// Every draw is independent, with replacement.
    Unlimited,
}

/// A single drawn item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw<T> {
    /// The item drawn.
    pub item: T,
    /// Whether the item came up reversed. Display metadata only.
    pub reversed: bool,
}

impl<T: fmt::Display> fmt::Display for Draw<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reversed {
            write!(f, "{} (Reversed)", self.item)
        } else {
            write!(f, "{}", self.item)
        }
    }
}

/// An ordered pool of items to draw from.
#[derive(Debug, Clone)]
pub struct DrawPool<T> {
    available: Vec<T>,
    mode: DrawMode,
    reversals: bool,
}

impl<T: Clone> DrawPool<T> {
    /// Create a pool holding `items`.
    pub fn new(items: Vec<T>, mode: DrawMode, reversals: bool) -> Self {
        Self {
            available: items,
            mode,
            reversals,
        }
    }

    /// The draw mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Whether draws may come up reversed.
    pub fn reversals(&self) -> bool {
        self.reversals
    }

    /// Items still available to draw.
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    /// True once no further draw can succeed.
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    /// Draw one item uniformly at random.
    ///
    /// In [`DrawMode::Limited`] the item is removed from the pool. The
    /// reversal flip never affects the pool.
    pub fn draw(&mut self, rng: &mut StdRng) -> DivinationResult<Draw<T>> {
        if self.available.is_empty() {
            return Err(DivinationError::PoolExhausted);
        }
        let index = rng.random_range(0..self.available.len());
        let item = match self.mode {
            DrawMode::Limited => self.available.remove(index),
            DrawMode::Unlimited => self.available[index].clone(),
        };
        let reversed = self.reversals && rng.random_bool(0.5);
        Ok(Draw { item, reversed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn items(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    #[test]
    fn limited_pool_exhausts_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = DrawPool::new(items(10), DrawMode::Limited, false);
        let mut seen = HashSet::new();
        for _ in 0..10 {
            let draw = pool.draw(&mut rng).unwrap();
            assert!(seen.insert(draw.item), "duplicate draw {}", draw.item);
        }
        assert_eq!(seen.len(), 10);
        assert!(pool.is_exhausted());
        assert_eq!(pool.draw(&mut rng), Err(DivinationError::PoolExhausted));
        // Still exhausted, still no panic.
        assert_eq!(pool.draw(&mut rng), Err(DivinationError::PoolExhausted));
    }

    #[test]
    fn unlimited_pool_never_shrinks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = DrawPool::new(items(3), DrawMode::Unlimited, false);
        for _ in 0..50 {
            assert!(pool.draw(&mut rng).unwrap().item < 3);
        }
        assert_eq!(pool.remaining(), 3);
    }

    #[test]
    fn no_reversals_unless_enabled() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = DrawPool::new(items(5), DrawMode::Unlimited, false);
        assert!((0..100).all(|_| !pool.draw(&mut rng).unwrap().reversed));
    }

    #[test]
    fn reversals_are_metadata_only() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pool = DrawPool::new(items(40), DrawMode::Limited, true);
        let draws: Vec<_> = (0..40).map(|_| pool.draw(&mut rng).unwrap()).collect();
        assert!(draws.iter().any(|d| d.reversed));
        assert!(draws.iter().any(|d| !d.reversed));
        let distinct: HashSet<_> = draws.iter().map(|d| d.item).collect();
        assert_eq!(distinct.len(), 40);
    }

    #[test]
    fn empty_pool_is_exhausted_in_any_mode() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pool: DrawPool<u32> = DrawPool::new(Vec::new(), DrawMode::Unlimited, true);
        assert_eq!(pool.draw(&mut rng), Err(DivinationError::PoolExhausted));
    }

    #[test]
    fn draw_display() {
        let upright = Draw {
            item: "13 - Death",
            reversed: false,
        };
        let reversed = Draw {
            item: "13 - Death",
            reversed: true,
        };
        assert_eq!(upright.to_string(), "13 - Death");
        assert_eq!(reversed.to_string(), "13 - Death (Reversed)");
    }
}

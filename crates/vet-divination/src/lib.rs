//! Divination tools for the Virtual Esoteric Toolkit.
//!
//! Provides tarot and rune draw pools (limited or unlimited, with optional
//! reversals), a coin toss log, a dice set with notation parsing and a
//! running total, and the I-Ching engine: three-coin line casting,
//! hexagram composition, and the King Wen hexagram and trigram tables.
//! Each tool is exposed as a [`vet_core::Tool`] session.

pub mod coin;
pub mod deck;
pub mod dice;
pub mod error;
pub mod iching;
pub mod pool;

pub use coin::{CoinFace, CoinLog, CoinSession};
pub use deck::{DeckKind, DeckSession};
pub use dice::{DiceSelection, DiceSession, Die};
pub use error::{DivinationError, DivinationResult};
pub use iching::{Hexagram, IChingSession, LineValue, Reading, Trigram};
pub use pool::{Draw, DrawMode, DrawPool};

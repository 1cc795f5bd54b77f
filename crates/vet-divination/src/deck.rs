//! Tarot and rune decks and their draw sessions.

use rand::rngs::StdRng;

use vet_core::{Command, Reply, Tool, ToolError, ToolResult, boxed, parse_yes_no};

use crate::error::DivinationError;
use crate::pool::{DrawMode, DrawPool};

/// The 22 major arcana, numbered 0 to 21.
pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Minor arcana suits in deck order.
pub const SUITS: [&str; 4] = ["Cups", "Pentacles", "Swords", "Wands"];

/// Minor arcana ranks in suit order.
pub const RANKS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page", "Knight",
    "Queen", "King",
];

/// The Elder Futhark: glyph and name, in aett order.
pub const RUNES: [(&str, &str); 24] = [
    ("ᚠ", "Fehu"),
    ("ᚢ", "Uruz"),
    ("ᚦ", "Thurisaz"),
    ("ᚨ", "Ansuz"),
    ("ᚱ", "Raidho"),
    ("ᚲ", "Kenaz"),
    ("ᚷ", "Gebo"),
    ("ᚹ", "Wunjo"),
    ("ᚺ", "Hagalaz"),
    ("ᚾ", "Nauthiz"),
    ("ᛁ", "Isa"),
    ("ᛃ", "Jera"),
    ("ᛇ", "Eihwaz"),
    ("ᛈ", "Perthro"),
    ("ᛉ", "Algiz"),
    ("ᛋ", "Sowilo"),
    ("ᛏ", "Tiwaz"),
    ("ᛒ", "Berkano"),
    ("ᛖ", "Ehwaz"),
    ("ᛗ", "Mannaz"),
    ("ᛚ", "Laguz"),
    ("ᛜ", "Ingwaz"),
    ("ᛞ", "Dagaz"),
    ("ᛟ", "Othala"),
];

/// The full 78-card tarot deck, labelled `"<n> - <name>"` from 0 to 77.
pub fn tarot_deck() -> Vec<String> {
    let minors = SUITS
        .iter()
        .flat_map(|suit| RANKS.iter().map(move |rank| format!("{rank} of {suit}")));
    MAJOR_ARCANA
        .iter()
        .map(|name| name.to_string())
        .chain(minors)
        .enumerate()
        .map(|(i, name)| format!("{i} - {name}"))
        .collect()
}

/// The 24-rune set, labelled `"<glyph> - <name>"`.
pub fn rune_set() -> Vec<String> {
    RUNES
        .iter()
        .map(|(glyph, name)| format!("{glyph} - {name}"))
        .collect()
}

/// Which deck a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckKind {
    /// 78 tarot cards.
    Tarot,
    /// 24 Elder Futhark runes.
    Runes,
}

impl DeckKind {
    /// The deck contents in order.
    pub fn items(self) -> Vec<String> {
        match self {
            Self::Tarot => tarot_deck(),
            Self::Runes => rune_set(),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Tarot => "Virtual Tarot Deck",
            Self::Runes => "Virtual Runes Set",
        }
    }

    fn exhausted_message(self) -> &'static str {
        match self {
            Self::Tarot => "No More Cards to Draw",
            Self::Runes => "No More Runes to Draw",
        }
    }
}

enum Stage {
    AskReversals,
    AskUnlimited { reversals: bool },
    Drawing(DrawPool<String>),
}

/// An interactive tarot or rune draw session.
///
/// Asks whether to use reversals and unlimited draws, then draws one item
/// per blank line until reset.
pub struct DeckSession {
    kind: DeckKind,
    stage: Stage,
    rng: StdRng,
}

impl DeckSession {
    /// Create a session for the given deck.
    pub fn new(kind: DeckKind, rng: StdRng) -> Self {
        Self {
            kind,
            stage: Stage::AskReversals,
            rng,
        }
    }

    /// The deck this session draws from.
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// The draw pool, once setup is complete.
    pub fn pool(&self) -> Option<&DrawPool<String>> {
        match &self.stage {
            Stage::Drawing(pool) => Some(pool),
            _ => None,
        }
    }

    fn draw(&mut self) -> ToolResult<Reply> {
        let Stage::Drawing(pool) = &mut self.stage else {
            return Err(ToolError::InvalidCommand);
        };
        match pool.draw(&mut self.rng) {
            Ok(draw) => {
                tracing::debug!(
                    deck = ?self.kind,
                    item = %draw,
                    remaining = pool.remaining(),
                    "drew"
                );
                Ok(Reply::Output(boxed(&draw.to_string())))
            }
            Err(DivinationError::PoolExhausted) => {
                Ok(Reply::Output(boxed(self.kind.exhausted_message())))
            }
            Err(other) => Err(other.into()),
        }
    }
}

impl Tool for DeckSession {
    fn title(&self) -> &'static str {
        self.kind.title()
    }

    fn prompt(&self) -> String {
        match self.stage {
            Stage::AskReversals => "Use reversals? (Y/N): ".to_string(),
            Stage::AskUnlimited { .. } => "Unlimited draws? (Y/N): ".to_string(),
            Stage::Drawing(_) => String::new(),
        }
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        let command = Command::parse(input);
        match command {
            Command::Reset => return Ok(Reply::Reset),
            Command::Menu => return Ok(Reply::Menu),
            Command::Proceed | Command::Text(_) => {}
        }

        match self.stage {
            Stage::AskReversals => {
                self.stage = Stage::AskUnlimited {
                    reversals: parse_yes_no(input),
                };
                Ok(Reply::silent())
            }
            Stage::AskUnlimited { reversals } => {
                let mode = if parse_yes_no(input) {
                    DrawMode::Unlimited
                } else {
                    DrawMode::Limited
                };
                self.stage = Stage::Drawing(DrawPool::new(self.kind.items(), mode, reversals));
                Ok(Reply::Output(
                    "[Enter] to draw, [R] to reset, [M] for menu.".to_string(),
                ))
            }
            Stage::Drawing(_) => match command {
                Command::Proceed => self.draw(),
                _ => Err(ToolError::InvalidCommand),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn session(kind: DeckKind, reversals: &str, unlimited: &str) -> DeckSession {
        let mut s = DeckSession::new(kind, StdRng::seed_from_u64(42));
        assert_eq!(s.prompt(), "Use reversals? (Y/N): ");
        s.handle(reversals).unwrap();
        assert_eq!(s.prompt(), "Unlimited draws? (Y/N): ");
        s.handle(unlimited).unwrap();
        s
    }

    fn drawn_text(reply: Reply) -> String {
        match reply {
            Reply::Output(text) => text.lines().nth(1).unwrap().to_string(),
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn tarot_deck_has_78_unique_cards() {
        let deck = tarot_deck();
        assert_eq!(deck.len(), 78);
        assert_eq!(deck[0], "0 - The Fool");
        assert_eq!(deck[21], "21 - The World");
        assert_eq!(deck[22], "22 - Ace of Cups");
        assert_eq!(deck[77], "77 - King of Wands");
        assert_eq!(deck.iter().collect::<HashSet<_>>().len(), 78);
    }

    #[test]
    fn rune_set_has_24_runes() {
        let runes = rune_set();
        assert_eq!(runes.len(), 24);
        assert_eq!(runes[0], "ᚠ - Fehu");
        assert_eq!(runes[23], "ᛟ - Othala");
    }

    #[test]
    fn setup_answers_configure_pool() {
        let s = session(DeckKind::Tarot, "y", "n");
        let pool = s.pool().unwrap();
        assert!(pool.reversals());
        assert_eq!(pool.mode(), DrawMode::Limited);
        assert_eq!(pool.remaining(), 78);

        let s = session(DeckKind::Runes, "n", "Y");
        let pool = s.pool().unwrap();
        assert!(!pool.reversals());
        assert_eq!(pool.mode(), DrawMode::Unlimited);
    }

    #[test]
    fn limited_runes_run_out() {
        let mut s = session(DeckKind::Runes, "n", "n");
        let mut seen = HashSet::new();
        for _ in 0..24 {
            let text = drawn_text(s.handle("").unwrap());
            assert!(seen.insert(text));
        }
        let text = drawn_text(s.handle("").unwrap());
        assert_eq!(text, "| No More Runes to Draw |");
        assert_eq!(s.pool().unwrap().remaining(), 0);
    }

    #[test]
    fn exhausted_tarot_message() {
        let mut s = session(DeckKind::Tarot, "n", "n");
        for _ in 0..78 {
            s.handle("").unwrap();
        }
        let text = drawn_text(s.handle("").unwrap());
        assert_eq!(text, "| No More Cards to Draw |");
    }

    #[test]
    fn unlimited_draws_never_run_out() {
        let mut s = session(DeckKind::Runes, "n", "y");
        for _ in 0..100 {
            let text = drawn_text(s.handle("").unwrap());
            assert!(!text.contains("No More"));
        }
    }

    #[test]
    fn reversed_draws_are_labelled() {
        let mut s = session(DeckKind::Tarot, "y", "y");
        let texts: Vec<String> = (0..60).map(|_| drawn_text(s.handle("").unwrap())).collect();
        assert!(texts.iter().any(|t| t.contains("(Reversed)")));
    }

    #[test]
    fn universal_commands() {
        let mut s = DeckSession::new(DeckKind::Tarot, StdRng::seed_from_u64(1));
        assert_eq!(s.handle("m").unwrap(), Reply::Menu);
        assert_eq!(s.handle("R").unwrap(), Reply::Reset);
        let mut s = session(DeckKind::Tarot, "n", "n");
        assert_eq!(s.handle("x"), Err(ToolError::InvalidCommand));
        assert_eq!(s.handle("r").unwrap(), Reply::Reset);
    }

    #[test]
    fn title_follows_deck() {
        let s = DeckSession::new(DeckKind::Runes, StdRng::seed_from_u64(1));
        assert_eq!(s.title(), "Virtual Runes Set");
        assert_eq!(s.kind(), DeckKind::Runes);
    }
}

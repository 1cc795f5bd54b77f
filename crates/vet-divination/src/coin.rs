//! Coin tossing with a running heads/tails tally.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use vet_core::{Command, Reply, Tool, ToolResult};

/// One face of a fair coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Heads. Weighs 3 in the I-Ching three-coin method.
    Heads,
    /// Tails. Weighs 2 in the I-Ching three-coin method.
    Tails,
}

impl CoinFace {
    /// The face's weight in the three-coin method.
    pub fn weight(self) -> u8 {
        match self {
            Self::Heads => 3,
            Self::Tails => 2,
        }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "Heads"),
            Self::Tails => write!(f, "Tails"),
        }
    }
}

/// Toss a fair coin.
pub fn toss(rng: &mut StdRng) -> CoinFace {
    if rng.random_bool(0.5) {
        CoinFace::Heads
    } else {
        CoinFace::Tails
    }
}

/// Every toss made during one session, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoinLog {
    results: Vec<CoinFace>,
}

impl CoinLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a toss.
    pub fn record(&mut self, face: CoinFace) {
        self.results.push(face);
    }

    /// Number of tosses recorded.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of heads recorded.
    pub fn heads(&self) -> usize {
        self.results
            .iter()
            .filter(|f| **f == CoinFace::Heads)
            .count()
    }

    /// Number of tails recorded.
    pub fn tails(&self) -> usize {
        self.total() - self.heads()
    }

    fn percent(&self, n: usize) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            n as f64 / self.total() as f64 * 100.0
        }
    }

    /// One-line tally, e.g. `Heads: 50.00% (n=1), Tails: 50.00% (n=1), Total: 2`.
    pub fn summary(&self) -> String {
        let heads = self.heads();
        let tails = self.tails();
        format!(
            "Heads: {:.2}% (n={heads}), Tails: {:.2}% (n={tails}), Total: {}",
            self.percent(heads),
            self.percent(tails),
            self.total()
        )
    }
}

/// An interactive coin toss session.
pub struct CoinSession {
    log: CoinLog,
    rng: StdRng,
}

impl CoinSession {
    /// Create a session with an empty log.
    pub fn new(rng: StdRng) -> Self {
        Self {
            log: CoinLog::new(),
            rng,
        }
    }

    /// The tosses made so far.
    pub fn log(&self) -> &CoinLog {
        &self.log
    }
}

impl Tool for CoinSession {
    fn title(&self) -> &'static str {
        "Virtual Coin Toss"
    }

    fn banner(&self) -> &'static str {
        "[Enter] to toss, [R] to reset, [M] for menu."
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        match Command::parse(input) {
            Command::Reset => Ok(Reply::Reset),
            Command::Menu => Ok(Reply::Menu),
            Command::Proceed | Command::Text(_) => {
                let face = toss(&mut self.rng);
                self.log.record(face);
                tracing::debug!(%face, total = self.log.total(), "tossed coin");
                Ok(Reply::Output(format!(
                    "Result: {face}\n{}",
                    self.log.summary()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn summary_formats_percentages() {
        let mut log = CoinLog::new();
        log.record(CoinFace::Heads);
        log.record(CoinFace::Tails);
        log.record(CoinFace::Heads);
        assert_eq!(
            log.summary(),
            "Heads: 66.67% (n=2), Tails: 33.33% (n=1), Total: 3"
        );
    }

    #[test]
    fn empty_log_summary() {
        assert_eq!(
            CoinLog::new().summary(),
            "Heads: 0.00% (n=0), Tails: 0.00% (n=0), Total: 0"
        );
    }

    #[test]
    fn weights() {
        assert_eq!(CoinFace::Heads.weight(), 3);
        assert_eq!(CoinFace::Tails.weight(), 2);
    }

    #[test]
    fn toss_is_roughly_fair() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut log = CoinLog::new();
        for _ in 0..10_000 {
            log.record(toss(&mut rng));
        }
        let heads = log.heads() as f64 / 10_000.0;
        assert!((0.45..0.55).contains(&heads), "heads ratio {heads}");
    }

    #[test]
    fn session_accumulates_log() {
        let mut s = CoinSession::new(StdRng::seed_from_u64(3));
        for _ in 0..5 {
            let Reply::Output(text) = s.handle("").unwrap() else {
                panic!("expected output");
            };
            assert!(text.starts_with("Result: "));
        }
        assert_eq!(s.log().total(), 5);
        let Reply::Output(text) = s.handle("\n").unwrap() else {
            panic!("expected output");
        };
        assert!(text.ends_with("Total: 6"));
    }

    #[test]
    fn session_commands() {
        let mut s = CoinSession::new(StdRng::seed_from_u64(3));
        assert_eq!(s.handle("r").unwrap(), Reply::Reset);
        assert_eq!(s.handle("M").unwrap(), Reply::Menu);
        assert_eq!(s.log().total(), 0);
    }

    #[test]
    fn any_text_tosses() {
        let mut s = CoinSession::new(StdRng::seed_from_u64(3));
        let Reply::Output(text) = s.handle("flip").unwrap() else {
            panic!("expected output");
        };
        assert!(text.starts_with("Result: "));
        assert_eq!(s.log().total(), 1);
    }

    #[test]
    fn log_serializes_in_toss_order() {
        let mut log = CoinLog::new();
        log.record(CoinFace::Heads);
        log.record(CoinFace::Tails);
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"{"results":["Heads","Tails"]}"#);
        let back: CoinLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.heads(), 1);
        assert_eq!(back.total(), 2);
    }
}

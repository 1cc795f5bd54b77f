//! Interactive I-Ching casting, one line per Enter press.

use rand::rngs::StdRng;
use vet_core::{Command, Reply, Tool, ToolError, ToolResult};

use super::line::{LineCast, cast_line};
use super::reading::{Hexagram, Reading};

const HINT: &str = "[Enter] to start, [R] to reset, [M] for menu.";

enum Stage {
    Idle,
    Casting(Vec<LineCast>),
}

/// An interactive I-Ching session.
pub struct IChingSession {
    rng: StdRng,
    stage: Stage,
}

impl IChingSession {
    /// Create an idle session.
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            stage: Stage::Idle,
        }
    }

    /// Whether a cast is under way.
    pub fn is_casting(&self) -> bool {
        matches!(self.stage, Stage::Casting(_))
    }

    fn toss_next(&mut self) -> String {
        let Stage::Casting(casts) = &mut self.stage else {
            return String::new();
        };
        let cast = cast_line(&mut self.rng);
        casts.push(cast);
        let result = format!("Result: {}", cast.describe());
        if casts.len() < 6 {
            return format!("{result}\n\nLine {}:", casts.len() + 1);
        }

        let mut lines = [cast.value(); 6];
        for (slot, c) in lines.iter_mut().zip(casts.iter()) {
            *slot = c.value();
        }
        self.stage = Stage::Idle;
        let reading = Reading::new(Hexagram::new(lines));
        format!("{result}\n\n{}\n\n{HINT}", reading.render())
    }
}

impl Tool for IChingSession {
    fn title(&self) -> &'static str {
        "Virtual I-Ching"
    }

    fn banner(&self) -> &'static str {
        HINT
    }

    fn prompt(&self) -> String {
        match &self.stage {
            Stage::Idle => String::new(),
            Stage::Casting(casts) => {
                format!("Press Enter to toss coins for line {}...", casts.len() + 1)
            }
        }
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        let command = Command::parse(input);
        match command {
            Command::Reset => return Ok(Reply::Reset),
            Command::Menu => return Ok(Reply::Menu),
            _ => {}
        }
        match self.stage {
            Stage::Idle => match command {
                Command::Proceed => {
                    self.stage = Stage::Casting(Vec::with_capacity(6));
                    Ok(Reply::Output("Line 1:".to_string()))
                }
                _ => Err(ToolError::InvalidCommand),
            },
            // Any line of input tosses while a cast is under way.
            Stage::Casting(_) => Ok(Reply::Output(self.toss_next())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn output(reply: ToolResult<Reply>) -> String {
        match reply {
            Ok(Reply::Output(text)) => text,
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn full_cast_returns_to_idle() {
        let mut s = IChingSession::new(StdRng::seed_from_u64(9));
        assert_eq!(output(s.handle("")), "Line 1:");
        assert!(s.is_casting());
        for line in 1..6 {
            assert_eq!(
                s.prompt(),
                format!("Press Enter to toss coins for line {line}...")
            );
            let text = output(s.handle(""));
            assert!(text.starts_with("Result: "));
            assert!(text.ends_with(&format!("Line {}:", line + 1)));
        }
        let text = output(s.handle(""));
        assert!(text.contains("Primary Hexagram:"));
        assert!(!text.contains("Meaning: Unknown"));
        assert!(text.ends_with(HINT));
        assert!(!s.is_casting());
        assert_eq!(s.prompt(), "");
    }

    #[test]
    fn idle_rejects_text() {
        let mut s = IChingSession::new(StdRng::seed_from_u64(1));
        assert_eq!(s.handle("cast"), Err(ToolError::InvalidCommand));
    }

    #[test]
    fn reset_and_menu_work_mid_cast() {
        let mut s = IChingSession::new(StdRng::seed_from_u64(1));
        s.handle("").unwrap();
        s.handle("").unwrap();
        assert_eq!(s.handle("r"), Ok(Reply::Reset));
        assert_eq!(s.handle("M"), Ok(Reply::Menu));
    }
}

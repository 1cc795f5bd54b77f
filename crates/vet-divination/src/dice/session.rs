//! The dice set session: choose dice, roll, keep a running total.

use rand::rngs::StdRng;

use vet_core::{Command, Reply, Tool, ToolError, ToolResult};

use super::notation::DiceSelection;

enum Stage {
    Choosing,
    Rolling(DiceSelection),
}

/// An interactive dice set.
///
/// The overall total accumulates across rolls until the session is reset.
pub struct DiceSession {
    stage: Stage,
    overall_total: u64,
    rng: StdRng,
}

impl DiceSession {
    /// Create a session waiting for a dice selection.
    pub fn new(rng: StdRng) -> Self {
        Self {
            stage: Stage::Choosing,
            overall_total: 0,
            rng,
        }
    }

    /// Sum of every die rolled since the session opened.
    pub fn overall_total(&self) -> u64 {
        self.overall_total
    }

    /// The current selection, once chosen.
    pub fn selection(&self) -> Option<&DiceSelection> {
        match &self.stage {
            Stage::Rolling(selection) => Some(selection),
            Stage::Choosing => None,
        }
    }

    fn roll(&mut self, selection: &DiceSelection) -> String {
        let mut out = String::new();
        for roll in selection.roll(&mut self.rng) {
            self.overall_total += u64::from(roll.total());
            out.push_str(&format!("{roll}\n"));
        }
        tracing::debug!(
            dice = selection.dice_count(),
            overall = self.overall_total,
            "rolled dice"
        );
        out.push_str(&format!("Overall Total: {}\n", self.overall_total));
        out.push_str("\n[Enter] to roll, [R] to change dice, [M] for menu.");
        out
    }
}

impl Tool for DiceSession {
    fn title(&self) -> &'static str {
        "Virtual Dice Set"
    }

    fn banner(&self) -> &'static str {
        "Choose dice (e.g., d6(2),d8(3)) or [M] for menu."
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        let command = Command::parse(input);
        match command {
            Command::Reset => return Ok(Reply::Reset),
            Command::Menu => return Ok(Reply::Menu),
            Command::Proceed | Command::Text(_) => {}
        }

        let stage = std::mem::replace(&mut self.stage, Stage::Choosing);
        let selection = match (stage, command) {
            (Stage::Choosing, Command::Text(notation)) => DiceSelection::parse(notation)?,
            (Stage::Choosing, _) => return Err(crate::DivinationError::EmptySelection.into()),
            (Stage::Rolling(selection), Command::Proceed) => selection,
            (Stage::Rolling(selection), _) => {
                self.stage = Stage::Rolling(selection);
                return Err(ToolError::InvalidCommand);
            }
        };

        let output = self.roll(&selection);
        self.stage = Stage::Rolling(selection);
        Ok(Reply::Output(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn output(reply: Reply) -> String {
        match reply {
            Reply::Output(text) => text,
            other => panic!("unexpected reply {other:?}"),
        }
    }

    fn group_sum(line: &str) -> u64 {
        let total = line.rsplit("(Total: ").next().unwrap();
        total.trim_end_matches(')').parse().unwrap()
    }

    #[test]
    fn choose_and_roll() {
        let mut s = DiceSession::new(StdRng::seed_from_u64(42));
        let text = output(s.handle("d6(2),d20(1)").unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("2 x d6: ["));
        assert!(lines[1].starts_with("1 x d20: ["));
        let sum = group_sum(lines[0]) + group_sum(lines[1]);
        assert_eq!(lines[2], format!("Overall Total: {sum}"));
        assert_eq!(s.overall_total(), sum);
        assert_eq!(s.selection().unwrap().dice_count(), 3);
    }

    #[test]
    fn total_accumulates_across_rolls() {
        let mut s = DiceSession::new(StdRng::seed_from_u64(7));
        let mut expected = 0;
        let first = output(s.handle("d6(2),d20(1)").unwrap());
        expected += first.lines().take(2).map(group_sum).sum::<u64>();
        for _ in 0..4 {
            let text = output(s.handle("").unwrap());
            expected += text.lines().take(2).map(group_sum).sum::<u64>();
            assert!(text.contains(&format!("Overall Total: {expected}")));
        }
        assert_eq!(s.overall_total(), expected);
    }

    #[test]
    fn invalid_notation_keeps_choosing() {
        let mut s = DiceSession::new(StdRng::seed_from_u64(1));
        let err = s.handle("d7(2)").unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: Invalid dice: d7");
        assert!(s.selection().is_none());
        let err = s.handle("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: no dice chosen");
        assert!(s.handle("d4(1)").is_ok());
    }

    #[test]
    fn text_while_rolling_is_invalid() {
        let mut s = DiceSession::new(StdRng::seed_from_u64(1));
        s.handle("d4(1)").unwrap();
        assert_eq!(s.handle("d6(1)"), Err(ToolError::InvalidCommand));
        assert!(s.selection().is_some());
        assert!(s.handle("").is_ok());
    }

    #[test]
    fn reset_and_menu() {
        let mut s = DiceSession::new(StdRng::seed_from_u64(1));
        s.handle("d4(1)").unwrap();
        assert_eq!(s.handle("R").unwrap(), Reply::Reset);
        assert_eq!(s.handle("m").unwrap(), Reply::Menu);
    }
}

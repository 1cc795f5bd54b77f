//! Interactive numerology calculator.

use chrono::Datelike;
use vet_core::{Command, Reply, Tool, ToolError, ToolResult};

use super::profile::{Birthdate, NumerologyProfile};

const HINT: &str = "[Enter] to start, [R] to reset, [M] for menu.";

enum Stage {
    Idle,
    AskBirthdate,
    AskName(Birthdate),
}

/// Asks for a birthdate and a name, then prints the report.
pub struct NumerologySession {
    stage: Stage,
    current_year: u32,
}

impl NumerologySession {
    /// A session using today's year for the Personal Year.
    pub fn new() -> Self {
        let year = chrono::Local::now().year();
        Self::for_year(u32::try_from(year).unwrap_or_default())
    }

    /// A session with a fixed current year.
    pub fn for_year(current_year: u32) -> Self {
        Self {
            stage: Stage::Idle,
            current_year,
        }
    }
}

impl Default for NumerologySession {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for NumerologySession {
    fn title(&self) -> &'static str {
        "Virtual Numerology Calculator"
    }

    fn banner(&self) -> &'static str {
        HINT
    }

    fn prompt(&self) -> String {
        match self.stage {
            Stage::Idle => String::new(),
            Stage::AskBirthdate => "Birthdate (YYYY MM DD): ".to_string(),
            Stage::AskName(_) => "Full name: ".to_string(),
        }
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        let command = Command::parse(input);
        // Any text at the name prompt is a name, even a lone R or M.
        if !matches!(self.stage, Stage::AskName(_)) {
            match command {
                Command::Reset => return Ok(Reply::Reset),
                Command::Menu => return Ok(Reply::Menu),
                _ => {}
            }
        }
        match self.stage {
            Stage::Idle => match command {
                Command::Proceed => {
                    self.stage = Stage::AskBirthdate;
                    Ok(Reply::silent())
                }
                _ => Err(ToolError::InvalidCommand),
            },
            Stage::AskBirthdate => {
                let birthdate: Birthdate = input.parse()?;
                self.stage = Stage::AskName(birthdate);
                Ok(Reply::silent())
            }
            Stage::AskName(birthdate) => {
                let profile =
                    NumerologyProfile::compute(&birthdate, input.trim(), self.current_year);
                self.stage = Stage::Idle;
                Ok(Reply::Output(format!("{}\n\n{HINT}", profile.report())))
            }
        }
    }
}

//! The session contract every toolkit tool implements.

use crate::error::ToolResult;

/// What the dispatcher should do after a tool handled a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text (if any) and keep the tool open.
    Output(String),
    /// Drop this session and open a fresh one in its place.
    Reset,
    /// Drop this session and return to the main menu.
    Menu,
}

impl Reply {
    /// Shorthand for a reply that prints nothing.
    pub fn silent() -> Self {
        Self::Output(String::new())
    }
}

/// The universal commands every tool loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank input: draw, compute, or start.
    Proceed,
    /// `R`: reset the tool.
    Reset,
    /// `M`: back to the menu.
    Menu,
    /// Anything else, trimmed.
    Text(&'a str),
}

impl<'a> Command<'a> {
    /// Classify a line of input. Control letters are case-insensitive.
    pub fn parse(input: &'a str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self::Proceed
        } else if trimmed.eq_ignore_ascii_case("r") {
            Self::Reset
        } else if trimmed.eq_ignore_ascii_case("m") {
            Self::Menu
        } else {
            Self::Text(trimmed)
        }
    }
}

/// Interpret a `(Y/N)` answer. Only `Y` counts as yes.
pub fn parse_yes_no(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// An interactive tool reachable from the main menu.
///
/// A session is exclusively owned by the dispatcher loop for as long as the
/// tool is open. Resetting replaces it with a fresh session.
pub trait Tool {
    /// Heading printed when the tool opens.
    fn title(&self) -> &'static str;

    /// Usage hint printed under the heading.
    fn banner(&self) -> &'static str {
        ""
    }

    /// Inline prompt printed before each line of input.
    fn prompt(&self) -> String {
        String::new()
    }

    /// Handle one line of user input.
    fn handle(&mut self, input: &str) -> ToolResult<Reply>;
}

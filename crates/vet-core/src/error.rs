//! Error types shared by every tool session.

use thiserror::Error;

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors a tool reports back to the user. None of them end the session.
///
/// The `Display` text is exactly what the console prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Input the tool does not recognize in its current state.
    #[error("Invalid command.")]
    InvalidCommand,

    /// Structured input (dates, numbers, dice notation) failed to parse.
    #[error("{0}")]
    InvalidInput(String),

    /// A computation backend failed, e.g. an astronomy lookup.
    #[error("Error: {0}")]
    Collaborator(String),
}

//! Error types for the divination tools.

use vet_core::ToolError;

/// Errors that can occur while drawing, rolling, or casting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DivinationError {
    /// A limited draw pool has no items left.
    #[error("pool exhausted")]
    PoolExhausted,

    /// A die type outside the supported set.
    #[error("Invalid dice: {0}")]
    InvalidDice(String),

    /// A dice group that is not of the form `dN(count)`.
    #[error("expected dN(count), got '{0}'")]
    MalformedGroup(String),

    /// A dice count that is not a whole number in range.
    #[error("invalid count '{0}', use 1 to {max}", max = crate::dice::MAX_DICE_PER_GROUP)]
    InvalidCount(String),

    /// Dice notation with no groups at all.
    #[error("no dice chosen")]
    EmptySelection,
}

/// Convenience result type for divination operations.
pub type DivinationResult<T> = Result<T, DivinationError>;

impl From<DivinationError> for ToolError {
    fn from(err: DivinationError) -> Self {
        ToolError::InvalidInput(format!("Invalid format: {err}"))
    }
}

//! Error types for the calculators.

use thiserror::Error;
use vet_core::ToolError;

/// Result type for calculator input handling.
pub type CalcResult<T> = Result<T, CalcError>;

/// Result type for ephemeris queries.
pub type AstroResult<T> = Result<T, AstroError>;

/// Malformed user input, reported so the field can be re-entered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A date that is not three whitespace-separated numbers.
    #[error("Invalid date: {0}. Use YYYY MM DD.")]
    InvalidDate(String),

    /// A time that is not two whitespace-separated numbers.
    #[error("Invalid time: {0}. Use HH MM.")]
    InvalidTime(String),

    /// A coordinate that is not a decimal number.
    #[error("Invalid coordinate: '{0}'")]
    InvalidCoordinate(String),

    /// A moon phase date list entry that does not parse.
    #[error("Invalid date format. Use YYYY MM DD.")]
    InvalidPhaseDate,

    /// A moon phase range longer than the tool will print.
    #[error("Range too long: {days} days, at most {max}", max = crate::astro::phase::MAX_RANGE_DAYS)]
    RangeTooLong {
        /// Days the requested range covers.
        days: i64,
    },

    /// A moon phase range whose end precedes its start.
    #[error("Range ends before it starts.")]
    ReversedRange,
}

/// Failures of the astronomy backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstroError {
    /// Latitude outside -90..=90 degrees.
    #[error("latitude {0} is out of range (-90 to 90)")]
    LatitudeOutOfRange(f64),

    /// Longitude outside -180..=180 degrees.
    #[error("longitude {0} is out of range (-180 to 180)")]
    LongitudeOutOfRange(f64),

    /// An instant outside the years the ephemeris covers.
    #[error("year {year} is outside the ephemeris range ({min} to {max})")]
    EpochOutOfRange {
        /// Requested year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// A calendar date or time that does not exist.
    #[error("{0} is not a valid date and time")]
    InvalidInstant(String),

    /// The ephemeris has no data for the body in the requested frame.
    #[error("no {frame} position for {body}")]
    Unsupported {
        /// Body name.
        body: &'static str,
        /// Frame name.
        frame: &'static str,
    },
}

impl From<CalcError> for ToolError {
    fn from(err: CalcError) -> Self {
        ToolError::InvalidInput(err.to_string())
    }
}

impl From<AstroError> for ToolError {
    fn from(err: AstroError) -> Self {
        tracing::warn!(%err, "astronomy lookup failed");
        ToolError::Collaborator(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_errors_are_input_errors() {
        let err: ToolError = CalcError::InvalidPhaseDate.into();
        assert_eq!(err.to_string(), "Invalid date format. Use YYYY MM DD.");
        let err: ToolError = CalcError::RangeTooLong { days: 400 }.into();
        assert_eq!(err.to_string(), "Range too long: 400 days, at most 366");
    }

    #[test]
    fn astro_errors_are_collaborator_errors() {
        let err: ToolError = AstroError::LatitudeOutOfRange(91.0).into();
        assert_eq!(err.to_string(), "Error: latitude 91 is out of range (-90 to 90)");
    }
}

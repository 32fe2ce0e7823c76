//! Error types for the termcal engine.

use thiserror::Error;

/// Errors that can occur in termcal operations.
#[derive(Error, Debug)]
pub enum TermcalError {
    #[error("Semester '{0}' not found in academic calendar")]
    UnknownSemester(String),

    #[error("Unknown semester term: {0}")]
    UnknownTerm(String),

    #[error("Malformed clock time: {0}")]
    MalformedTime(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Entry '{0}' does not start before it ends")]
    MalformedEntry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for termcal operations.
pub type TermcalResult<T> = Result<T, TermcalError>;

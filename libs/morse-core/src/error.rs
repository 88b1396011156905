//! Error types for morse-core.

use thiserror::Error;

/// Result type alias using TempoError.
pub type Result<T> = std::result::Result<T, TempoError>;

/// Raised when a tempo name cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tempo {input:?}, expected slow, medium, or fast")]
pub struct TempoError {
    pub input: String,
}

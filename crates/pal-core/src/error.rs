//! Error types for pal
//!
//! Validation itself is total and never fails. Errors only arise at the
//! edges: decoding caller-supplied bytes and rendering results as JSON.

use thiserror::Error;

/// pal error types
#[derive(Debug, Error)]
pub enum Error {
    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8: input is valid up to byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },

    /// JSON rendering failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Result type alias for pal operations
pub type Result<T> = std::result::Result<T, Error>;

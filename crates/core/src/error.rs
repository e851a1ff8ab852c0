//! Error types for loading slide markup and emitting parsed decks.
//!
//! The parser itself never fails; these cover the I/O and output
//! boundaries around it.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around slide parsing.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the markup source.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// The markup source exceeds the caller-imposed size cap.
    #[error("Input exceeds the {limit} byte limit (read {size} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    /// The markup source is not valid UTF-8.
    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    /// The requested output format is not known.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Failed to serialize a document or manifest.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

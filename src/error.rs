//! Error types for the tiqtaq crate

use thiserror::Error;

/// Main error type for the tiqtaq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid character '{character}' in move sequence (expected digits 0-8)")]
    InvalidCharacter { character: char },

    #[error("invalid move: position {position} is already occupied")]
    PositionOccupied { position: u8 },

    #[error("game already over")]
    GameOver,

    #[error("unknown symmetry code '{code}' (expected one of: {expected})")]
    UnknownSymmetry { code: String, expected: String },

    #[error("invalid history key '{key}': {reason}")]
    InvalidHistoryKey { key: String, reason: String },

    #[error("invalid outcome code {code} (expected 1, -1 or 0)")]
    InvalidOutcomeCode { code: i64 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

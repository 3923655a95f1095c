//! Error types for the similarity indexes

use thiserror::Error;

/// Result type alias for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Error types that can occur in index operations
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

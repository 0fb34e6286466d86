// Rust guideline compliant 2026-02-09

//! Error types for response emission.

use thiserror::Error;

/// Result type alias for emission operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for emission operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while writing to the response sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding of the envelope failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response sink rejected the operation.
    #[error("Sink error: {0}")]
    Sink(String),
}

//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store.
///
/// Invalid user input (empty text, unknown ids, malformed dates) is not
/// an error: those mutations resolve as no-ops and the caller sees it in
/// the return value. Only environment failures reach this type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

//! Error types for value construction and serialization.

use thiserror::Error;

/// Result type for value operations.
pub type ValueResult<T> = std::result::Result<T, ValueError>;

/// Errors raised while (de)serializing values.
#[derive(Error, Debug)]
pub enum ValueError {
    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

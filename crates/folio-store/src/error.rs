//! Content store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// The stored row is not valid JSON.
    #[error("Stored document is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    /// The listener could not be started.
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// Serving needs a Tokio runtime to drive database calls.
    #[error("no Tokio runtime available to serve requests")]
    NoRuntime,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

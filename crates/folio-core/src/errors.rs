//! Cross-cutting error types for Folio.
//!
//! Crate-specific errors (`SyncError`, `StoreError`, ...) live in their own
//! crates. The CLI converges everything on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The admin gate rejected a username/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A document could not be parsed or serialized.
    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

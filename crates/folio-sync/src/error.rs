//! Synchronizer error types.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single request against one endpoint did not succeed.
///
/// Every variant means "try the next endpoint"; none of them is fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RemoteError {
    /// Connection refused, DNS failure, timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// The body was not JSON, or not shaped like a store envelope/document.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The store answered `success: false`.
    #[error("store rejected request: {0}")]
    Rejected(String),

    /// A successful response without a document payload.
    #[error("response carried no document")]
    Missing,
}

impl From<reqwest::Error> for RemoteError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

/// One failed request, as reported in `SyncFailed`.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("attempt {attempt} at {endpoint}: {error}")]
pub struct AttemptError {
    /// 1-based pass over the endpoint list.
    pub attempt: u32,
    pub endpoint: String,
    pub error: RemoteError,
}

/// Errors from the local durable cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The slot holds something that is not a document.
    #[error("cached document is unreadable: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors surfaced by synchronizer construction and `update`.
///
/// Network failures never appear here; they are reported through events and
/// [`crate::SyncOutcome`].
#[derive(Debug, Error)]
pub enum SyncError {
    /// The optimistic local write failed, so nothing was queued.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// `update` needs a Tokio runtime to run the background sync.
    #[error("no Tokio runtime available to run the background sync")]
    NoRuntime,

    /// A configured endpoint or origin is not a usable URL.
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Endpoint resolution produced an empty list.
    #[error("no remote endpoints configured")]
    NoEndpoints,

    /// No cache directory is configured and the platform has no data dir.
    #[error("no cache directory available; set cache.dir")]
    NoCacheDir,

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

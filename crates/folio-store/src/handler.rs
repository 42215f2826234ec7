//! Request handling, independent of the HTTP server.
//!
//! | Method    | Result                                                   |
//! |-----------|----------------------------------------------------------|
//! | `GET`     | `200 {success, data}` or `404 No portfolio found`        |
//! | `POST`    | `200 {success}`, `400 Invalid JSON` or `500 {message}`   |
//! | `OPTIONS` | `200`, empty body                                        |
//! | other     | `405 Method not allowed`                                 |
//!
//! Paths outside the configured routes answer `404 Not found`.

use folio_core::responses::StoreEnvelope;
use serde_json::Value;
use tiny_http::Method;
use tracing::{error, info};

use crate::ContentStore;

/// Headers sent with every response, including preflight and errors.
pub const RESPONSE_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

/// Status and optional JSON envelope of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub envelope: Option<StoreEnvelope>,
}

impl Reply {
    const fn new(status: u16, envelope: StoreEnvelope) -> Self {
        Self {
            status,
            envelope: Some(envelope),
        }
    }

    fn failure(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, StoreEnvelope::failure(message))
    }

    /// Serialized body; empty for preflight replies.
    #[must_use]
    pub fn body(&self) -> String {
        self.envelope
            .as_ref()
            .and_then(|envelope| serde_json::to_string(envelope).ok())
            .unwrap_or_default()
    }
}

/// Answer one request.
pub async fn respond(
    store: &ContentStore,
    routes: &[String],
    method: &Method,
    url: &str,
    body: &[u8],
) -> Reply {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    if !routes.iter().any(|route| route == path) {
        return Reply::failure(404, "Not found");
    }

    match method {
        Method::Options => Reply {
            status: 200,
            envelope: None,
        },
        Method::Get => read(store).await,
        Method::Post => write(store, body).await,
        _ => Reply::failure(405, "Method not allowed"),
    }
}

async fn read(store: &ContentStore) -> Reply {
    match store.load().await {
        Ok(Some(data)) => Reply::new(200, StoreEnvelope::with_data(data)),
        Ok(None) => Reply::failure(404, "No portfolio found"),
        Err(e) => {
            error!(error = %e, "failed to load document");
            Reply::failure(500, e.to_string())
        }
    }
}

async fn write(store: &ContentStore, body: &[u8]) -> Reply {
    let Some(document) = parse_document(body) else {
        return Reply::failure(400, "Invalid JSON");
    };
    match store.upsert(&document).await {
        Ok(()) => {
            info!("document replaced");
            Reply::new(200, StoreEnvelope::ok())
        }
        Err(e) => {
            error!(error = %e, "failed to store document");
            Reply::failure(500, e.to_string())
        }
    }
}

/// A request body is accepted only if it is a non-empty JSON object.
fn parse_document(body: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .filter(|value| value.as_object().is_some_and(|map| !map.is_empty()))
}

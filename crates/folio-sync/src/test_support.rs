//! In-process doubles for synchronizer tests.

use folio_core::ContentDocument;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::cache::ContentCache;
use crate::endpoints::Endpoint;
use crate::error::{CacheError, RemoteError};
use crate::remote::RemoteStore;

/// How an endpoint of [`ScriptedRemote`] behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Reads return the stored document, writes replace it.
    Serve,
    NotFound,
    Unreachable,
    /// Answers with an HTML page instead of an envelope.
    Malformed,
}

#[derive(Debug, Default)]
struct State {
    scripts: HashMap<String, Script>,
    stored: Option<ContentDocument>,
    gets: Vec<String>,
    puts: Vec<String>,
}

/// A remote whose endpoints share one stored document. Unscripted endpoints
/// are unreachable.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRemote {
    state: Arc<Mutex<State>>,
}

impl ScriptedRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self, endpoint: &Endpoint, script: Script) -> &Self {
        self.state
            .lock()
            .unwrap()
            .scripts
            .insert(endpoint.to_string(), script);
        self
    }

    pub fn store(&self, document: ContentDocument) {
        self.state.lock().unwrap().stored = Some(document);
    }

    pub fn stored(&self) -> Option<ContentDocument> {
        self.state.lock().unwrap().stored.clone()
    }

    pub fn gets(&self) -> Vec<String> {
        self.state.lock().unwrap().gets.clone()
    }

    pub fn puts(&self) -> Vec<String> {
        self.state.lock().unwrap().puts.clone()
    }

    fn behaviour(state: &State, endpoint: &Endpoint) -> Script {
        state
            .scripts
            .get(endpoint.as_str())
            .copied()
            .unwrap_or(Script::Unreachable)
    }
}

fn failure(script: Script) -> RemoteError {
    match script {
        Script::NotFound => RemoteError::Status {
            status: 404,
            body: r#"{"success":false,"message":"No portfolio found"}"#.into(),
        },
        Script::Malformed => RemoteError::Malformed("expected value at line 1 column 1".into()),
        Script::Serve | Script::Unreachable => {
            RemoteError::Transport("connection refused".into())
        }
    }
}

impl RemoteStore for ScriptedRemote {
    async fn get(&self, endpoint: &Endpoint) -> Result<ContentDocument, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.gets.push(endpoint.to_string());
        match Self::behaviour(&state, endpoint) {
            Script::Serve => state.stored.clone().ok_or(RemoteError::Missing),
            other => Err(failure(other)),
        }
    }

    async fn put(&self, endpoint: &Endpoint, document: &ContentDocument) -> Result<(), RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.puts.push(endpoint.to_string());
        match Self::behaviour(&state, endpoint) {
            Script::Serve => {
                state.stored = Some(document.clone());
                Ok(())
            }
            other => Err(failure(other)),
        }
    }
}

/// A cache whose writes always fail.
#[derive(Debug, Default)]
pub struct ReadOnlyCache;

impl ContentCache for ReadOnlyCache {
    fn load(&self) -> Result<Option<ContentDocument>, CacheError> {
        Ok(None)
    }

    fn store(&self, _document: &ContentDocument) -> Result<(), CacheError> {
        Err(CacheError::Io {
            path: "/read-only/portfolio_backup.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

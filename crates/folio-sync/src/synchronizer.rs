//! The content synchronizer.
//!
//! Reads walk the endpoint list once and fall back to the local cache, then
//! to the default document. Writes are optimistic: the cache and the
//! in-memory document are replaced synchronously, and the remote write runs
//! in a background task with linear-backoff retries.
//!
//! Every write gets a sequence number. A newer write aborts the previous
//! write's task, and a task that notices it has been superseded stops
//! without emitting a sync event.

use chrono::Utc;
use folio_config::FolioConfig;
use folio_core::ContentDocument;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::cache::{ContentCache, FileCache};
use crate::endpoints::{self, Endpoint};
use crate::error::{AttemptError, SyncError};
use crate::events::{EventBus, SyncEvent, SyncReceipt};
use crate::http::HttpRemote;
use crate::remote::RemoteStore;
use crate::retry::RetryPolicy;

/// Where a fetched document came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "endpoint", rename_all = "snake_case")]
pub enum FetchSource {
    Remote(Endpoint),
    Cache,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fetched {
    pub source: FetchSource,
    pub document: ContentDocument,
}

/// Final result of one background sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncOutcome {
    Persisted { receipt: SyncReceipt },
    Failed { errors: Vec<AttemptError> },
    /// A newer write took over before this one finished.
    Superseded,
}

/// Returned by [`Synchronizer::update`] once the write is cached and queued.
///
/// Dropping the ticket does not cancel the sync.
#[derive(Debug)]
pub struct SyncTicket {
    sequence: u64,
    handle: Option<JoinHandle<SyncOutcome>>,
}

impl SyncTicket {
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Wait for the background sync to finish.
    pub async fn persisted(self) -> SyncOutcome {
        let Some(handle) = self.handle else {
            return SyncOutcome::Superseded;
        };
        match handle.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => SyncOutcome::Superseded,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

struct State {
    current: Arc<ContentDocument>,
    sequence: u64,
    pending: Option<AbortHandle>,
}

struct Inner<R, C> {
    remote: R,
    cache: C,
    endpoints: Vec<Endpoint>,
    retry: RetryPolicy,
    events: EventBus,
    state: Mutex<State>,
}

/// Keeps one [`ContentDocument`] in sync between a remote store and a local cache.
///
/// Cheap to clone; clones share state, cache and event bus.
pub struct Synchronizer<R, C> {
    inner: Arc<Inner<R, C>>,
}

impl<R, C> Clone for Synchronizer<R, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Synchronizer<HttpRemote, FileCache> {
    /// HTTP remote and file cache, both configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] if the endpoint list is invalid or empty, the
    /// cache location cannot be determined, or the HTTP client fails to build.
    pub fn from_config(config: &FolioConfig) -> Result<Self, SyncError> {
        let remote = HttpRemote::new(&config.remote)?;
        let cache = FileCache::from_config(&config.cache)?;
        let endpoints = endpoints::resolve(&config.remote)?;
        Self::new(remote, cache, endpoints, RetryPolicy::from(&config.sync))
    }
}

impl<R: RemoteStore, C: ContentCache> Synchronizer<R, C> {
    /// # Errors
    ///
    /// Returns [`SyncError::NoEndpoints`] if `endpoints` is empty.
    pub fn new(
        remote: R,
        cache: C,
        endpoints: Vec<Endpoint>,
        retry: RetryPolicy,
    ) -> Result<Self, SyncError> {
        if endpoints.is_empty() {
            return Err(SyncError::NoEndpoints);
        }
        Ok(Self {
            inner: Arc::new(Inner {
                remote,
                cache,
                endpoints,
                retry,
                events: EventBus::new(),
                state: Mutex::new(State {
                    current: Arc::new(ContentDocument::default()),
                    sequence: 0,
                    pending: None,
                }),
            }),
        })
    }

    /// Fetch the document. Never fails; see [`Self::fetch_with_source`].
    pub async fn fetch(&self) -> ContentDocument {
        self.fetch_with_source().await.document
    }

    /// Fetch the document and report which tier produced it.
    ///
    /// The result becomes the current document unless an update happened
    /// while the fetch was in flight.
    pub async fn fetch_with_source(&self) -> Fetched {
        let started = self.inner.lock_state().sequence;
        let fetched = self.inner.read_through().await;

        let mut state = self.inner.lock_state();
        if state.sequence == started {
            state.current = Arc::new(fetched.document.clone());
        } else {
            debug!("document updated during fetch; keeping local edit as current");
        }
        fetched
    }

    /// Replace the document: write the cache, publish the change, then queue
    /// the remote write.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NoRuntime`] outside a Tokio runtime and
    /// [`SyncError::Cache`] if the local write fails; nothing is published or
    /// queued in either case.
    pub fn update(&self, document: ContentDocument) -> Result<SyncTicket, SyncError> {
        let runtime = Handle::try_current().map_err(|_| SyncError::NoRuntime)?;
        let document = Arc::new(document);

        let sequence = {
            let mut state = self.inner.lock_state();
            self.inner.cache.store(&document)?;
            state.current = Arc::clone(&document);
            state.sequence += 1;
            state.sequence
        };
        debug!(sequence, "document written to local cache");

        self.inner.events.emit(&SyncEvent::DocumentChanged {
            sequence,
            document: Arc::clone(&document),
        });

        let mut state = self.inner.lock_state();
        if state.sequence != sequence {
            debug!(sequence, "superseded before sync was queued");
            return Ok(SyncTicket {
                sequence,
                handle: None,
            });
        }
        if let Some(previous) = state.pending.take() {
            previous.abort();
        }
        let inner = Arc::clone(&self.inner);
        let handle = runtime.spawn(inner.push(sequence, document));
        state.pending = Some(handle.abort_handle());

        Ok(SyncTicket {
            sequence,
            handle: Some(handle),
        })
    }

    /// [`Self::update`], then wait for the sync outcome.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update`].
    pub async fn update_and_wait(&self, document: ContentDocument) -> Result<SyncOutcome, SyncError> {
        Ok(self.update(document)?.persisted().await)
    }

    /// The document as last fetched or updated.
    #[must_use]
    pub fn current(&self) -> Arc<ContentDocument> {
        Arc::clone(&self.inner.lock_state().current)
    }

    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.inner.events
    }

    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.inner.endpoints
    }
}

impl<R: RemoteStore, C: ContentCache> Inner<R, C> {
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_superseded(&self, sequence: u64) -> bool {
        self.lock_state().sequence != sequence
    }

    async fn read_through(&self) -> Fetched {
        for endpoint in &self.endpoints {
            debug!(%endpoint, "fetching document");
            match self.remote.get(endpoint).await {
                Ok(document) => {
                    info!(%endpoint, "fetched document");
                    return Fetched {
                        source: FetchSource::Remote(endpoint.clone()),
                        document,
                    };
                }
                Err(e) => warn!(%endpoint, error = %e, "fetch failed; trying next endpoint"),
            }
        }

        match self.cache.load() {
            Ok(Some(document)) => {
                warn!("no endpoint answered; using cached document");
                Fetched {
                    source: FetchSource::Cache,
                    document,
                }
            }
            Ok(None) => {
                warn!("no endpoint answered and cache is empty; using default document");
                Self::fallback()
            }
            Err(e) => {
                warn!(error = %e, "no endpoint answered and cache is unreadable; using default document");
                Self::fallback()
            }
        }
    }

    fn fallback() -> Fetched {
        Fetched {
            source: FetchSource::Default,
            document: ContentDocument::default(),
        }
    }

    async fn push(self: Arc<Self>, sequence: u64, document: Arc<ContentDocument>) -> SyncOutcome {
        let attempts = self.retry.attempts();
        let mut errors = Vec::new();

        for attempt in 1..=attempts {
            if self.is_superseded(sequence) {
                debug!(sequence, attempt, "sync superseded by a newer write");
                return SyncOutcome::Superseded;
            }

            for endpoint in &self.endpoints {
                debug!(sequence, attempt, %endpoint, "pushing document");
                match self.remote.put(endpoint, &document).await {
                    Ok(()) => {
                        let receipt = SyncReceipt {
                            sequence,
                            endpoint: endpoint.to_string(),
                            at: Utc::now(),
                        };
                        info!(sequence, attempt, %endpoint, "document synced");
                        self.events.emit(&SyncEvent::SyncSucceeded(receipt.clone()));
                        return SyncOutcome::Persisted { receipt };
                    }
                    Err(error) => {
                        warn!(sequence, attempt, %endpoint, %error, "push failed; trying next endpoint");
                        errors.push(AttemptError {
                            attempt,
                            endpoint: endpoint.to_string(),
                            error,
                        });
                    }
                }
            }

            if attempt < attempts {
                let delay = self.retry.delay_after(attempt);
                debug!(sequence, attempt, ?delay, "every endpoint failed; backing off");
                tokio::time::sleep(delay).await;
            }
        }

        if self.is_superseded(sequence) {
            return SyncOutcome::Superseded;
        }
        error!(
            sequence,
            attempts,
            failures = errors.len(),
            "document sync failed on every endpoint; content remains in local cache"
        );
        self.events.emit(&SyncEvent::SyncFailed {
            sequence,
            errors: errors.clone(),
        });
        SyncOutcome::Failed { errors }
    }
}

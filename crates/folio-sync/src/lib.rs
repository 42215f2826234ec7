//! # folio-sync
//!
//! Keeps the portfolio [`ContentDocument`](folio_core::ContentDocument) in
//! sync between a remote content store and a local durable cache.
//!
//! - [`Synchronizer::fetch`] walks the [endpoint list](endpoints::resolve)
//!   once, then falls back to the cache and finally to the default document.
//! - [`Synchronizer::update`] writes the cache and publishes
//!   [`SyncEvent::DocumentChanged`] synchronously, then pushes to the store in
//!   a background task with linear-backoff retries.
//! - Sync results arrive as [`SyncEvent`]s on the synchronizer's [`EventBus`]
//!   and through [`SyncTicket::persisted`].

pub mod cache;
pub mod endpoints;
pub mod events;
pub mod remote;
pub mod retry;

mod error;
mod http;
mod synchronizer;

#[cfg(test)]
mod test_support;

pub use cache::{ContentCache, FileCache, MemoryCache};
pub use endpoints::Endpoint;
pub use error::{AttemptError, CacheError, RemoteError, SyncError};
pub use events::{EventBus, Subscription, SyncEvent, SyncReceipt};
pub use http::HttpRemote;
pub use remote::RemoteStore;
pub use retry::RetryPolicy;
pub use synchronizer::{FetchSource, Fetched, SyncOutcome, SyncTicket, Synchronizer};

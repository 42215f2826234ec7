//! Synchronizer-owned event bus.
//!
//! Listeners are plain callbacks invoked synchronously, in registration
//! order, on the thread that emits. A listener may subscribe or unsubscribe
//! from inside its own callback: dispatch iterates over a snapshot.

use chrono::{DateTime, Utc};
use folio_core::ContentDocument;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::sync::mpsc;

use crate::error::AttemptError;

/// Proof that a write reached a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReceipt {
    /// Write sequence number of the persisted update.
    pub sequence: u64,
    /// Endpoint that accepted the write.
    pub endpoint: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// The current document was replaced locally (cache already written).
    DocumentChanged {
        sequence: u64,
        document: Arc<ContentDocument>,
    },
    /// A background sync stored the document remotely.
    SyncSucceeded(SyncReceipt),
    /// A background sync exhausted every pass.
    SyncFailed {
        sequence: u64,
        errors: Vec<AttemptError>,
    },
}

impl SyncEvent {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DocumentChanged { .. } => "document_changed",
            Self::SyncSucceeded(_) => "sync_succeeded",
            Self::SyncFailed { .. } => "sync_failed",
        }
    }

    /// Write sequence number the event belongs to.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        match self {
            Self::DocumentChanged { sequence, .. } | Self::SyncFailed { sequence, .. } => {
                *sequence
            }
            Self::SyncSucceeded(receipt) => receipt.sequence,
        }
    }
}

type Listener = Arc<dyn Fn(&SyncEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl Registry {
    fn remove(&self, id: u64) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Cloneable handle to one bus; clones share listeners.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Registry>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered while the returned guard lives.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SyncEvent) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Forward every event into an unbounded channel.
    #[must_use = "dropping the subscription closes the channel"]
    pub fn subscribe_channel(&self) -> (Subscription, mpsc::UnboundedReceiver<SyncEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.subscribe(move |event| {
            let _ = tx.send(event.clone());
        });
        (subscription, rx)
    }

    /// Deliver `event` to every listener registered at the time of the call.
    pub fn emit(&self, event: &SyncEvent) {
        let snapshot: Vec<Listener> = self
            .registry
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        tracing::trace!(kind = event.kind(), listeners = snapshot.len(), "emit");
        for listener in snapshot {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Unsubscribes its listener when dropped.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the bus.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn changed(sequence: u64) -> SyncEvent {
        SyncEvent::DocumentChanged {
            sequence,
            document: Arc::new(ContentDocument::default()),
        }
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        let _a = bus.subscribe(move |_| first.lock().unwrap().push("a"));
        let second = Arc::clone(&seen);
        let _b = bus.subscribe(move |_| second.lock().unwrap().push("b"));

        bus.emit(&changed(1));
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&count);
        let sub = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(&changed(1));
        drop(sub);
        bus.emit(&changed(2));

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn detached_subscription_stays_registered() {
        let bus = EventBus::new();
        bus.subscribe(|_| {}).detach();
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn listener_may_subscribe_during_dispatch() {
        let bus = EventBus::new();
        let inner_bus = bus.clone();
        let _sub = bus.subscribe(move |_| inner_bus.subscribe(|_| {}).detach());

        bus.emit(&changed(1));
        assert_eq!(bus.listener_count(), 2);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus = EventBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }

    #[tokio::test]
    async fn channel_subscription_receives_events() {
        let bus = EventBus::new();
        let (_sub, mut rx) = bus.subscribe_channel();

        bus.emit(&changed(7));
        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind(), "document_changed");
        assert_eq!(event.sequence(), 7);
    }
}

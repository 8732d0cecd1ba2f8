//! Concurrent storage for live subscriber connections.
//!
//! [`SubscriberRegistry`] tracks the send handle of every open WebSocket
//! connection behind a `RwLock<HashMap<...>>`. Admission and removal may
//! race with broadcast fan-out; fan-out always works on a snapshot taken
//! under the read lock, so concurrent mutation is safe.

use std::collections::HashMap;

use axum::extract::ws::Utf8Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::{RwLock, mpsc};

use super::SubscriberId;

/// A tracked subscriber: the relay channel into its connection task plus
/// admission metadata.
#[derive(Debug)]
pub struct SubscriberEntry {
    /// Unique connection identifier (immutable after admission).
    pub id: SubscriberId,

    /// Sending half of the relay channel. The connection task owns the
    /// receiving half and forwards everything to the socket.
    pub sender: mpsc::UnboundedSender<Utf8Bytes>,

    /// When the connection was admitted.
    pub admitted_at: DateTime<Utc>,
}

/// Central store for all live subscriber connections.
///
/// # Concurrency
///
/// - Admissions and removals take the write lock briefly.
/// - Broadcast fan-out reads a snapshot under the read lock and never sends
///   while holding it.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    subscribers: RwLock<HashMap<SubscriberId, SubscriberEntry>>,
}

impl SubscriberRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a connection, returning its fresh identifier.
    ///
    /// There is no upper bound and no deduplication: every admission is a
    /// new handle with a new id.
    pub async fn admit(&self, sender: mpsc::UnboundedSender<Utf8Bytes>) -> SubscriberId {
        let id = SubscriberId::new();
        let entry = SubscriberEntry {
            id,
            sender,
            admitted_at: Utc::now(),
        };
        self.subscribers.write().await.insert(id, entry);
        id
    }

    /// Removes a connection. Idempotent: removing an id that is already
    /// gone is a no-op, since the connection task and the broadcaster may
    /// both try to prune the same connection.
    pub async fn remove(&self, id: SubscriberId) {
        self.subscribers.write().await.remove(&id);
    }

    /// Returns a snapshot of the current send handles.
    ///
    /// Senders are cheap clones onto the same channels; connections admitted
    /// or removed after the snapshot is taken are unaffected by it.
    pub async fn snapshot(&self) -> Vec<(SubscriberId, mpsc::UnboundedSender<Utf8Bytes>)> {
        self.subscribers
            .read()
            .await
            .values()
            .map(|entry| (entry.id, entry.sender.clone()))
            .collect()
    }

    /// Returns the number of tracked connections.
    pub async fn len(&self) -> usize {
        self.subscribers.read().await.len()
    }

    /// Returns `true` if no connections are tracked.
    pub async fn is_empty(&self) -> bool {
        self.subscribers.read().await.is_empty()
    }
}

//! Fan-out delivery of weather events to every live subscriber.
//!
//! [`Broadcaster`] serializes an event once and pushes the same immutable
//! payload into every relay channel in the registry. Delivery is
//! fire-and-forget: no acknowledgment is collected and a failure on one
//! connection never aborts delivery to the rest.

use std::sync::Arc;

use axum::extract::ws::Utf8Bytes;

use super::{SubscriberRegistry, WeatherEvent};

/// Delivers weather events to all registry members.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    registry: Arc<SubscriberRegistry>,
}

impl Broadcaster {
    /// Creates a broadcaster over the given registry.
    #[must_use]
    pub fn new(registry: Arc<SubscriberRegistry>) -> Self {
        Self { registry }
    }

    /// Broadcasts `event` to every currently tracked connection.
    ///
    /// Returns the number of connections the payload was handed to. A send
    /// fails only when the connection task has already gone away; such
    /// connections are pruned from the registry and skipped silently.
    pub async fn broadcast(&self, event: &WeatherEvent) -> usize {
        let payload = Utf8Bytes::from(event.to_json());
        let snapshot = self.registry.snapshot().await;

        let mut delivered = 0;
        let mut dead = Vec::new();
        for (id, sender) in snapshot {
            if sender.send(payload.clone()).is_ok() {
                delivered += 1;
            } else {
                dead.push(id);
            }
        }

        for id in dead {
            tracing::debug!(%id, "pruning dead subscriber");
            self.registry.remove(id).await;
        }

        delivered
    }
}

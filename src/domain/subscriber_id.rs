//! Type-safe subscriber identifier.
//!
//! [`SubscriberId`] is a newtype wrapper around [`uuid::Uuid`] (v4). Each
//! WebSocket connection gets a fresh one on admission, so identifiers are
//! never reused across connections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a live subscriber connection.
///
/// Generated when the connection is admitted to the
/// [`super::SubscriberRegistry`] and used as its dictionary key until the
/// connection is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberId(uuid::Uuid);

impl SubscriberId {
    /// Creates a new random `SubscriberId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Domain layer: subscriber identity, the connection registry, the
//! broadcaster, and the validated weather event payload.
//!
//! This is the relay core: everything here is purely in-memory and
//! process-lifetime only. A restart drops all subscribers, who are
//! expected to reconnect.

pub mod broadcaster;
pub mod subscriber_id;
pub mod subscriber_registry;
pub mod weather_event;

pub use broadcaster::Broadcaster;
pub use subscriber_id::SubscriberId;
pub use subscriber_registry::{SubscriberEntry, SubscriberRegistry};
pub use weather_event::WeatherEvent;

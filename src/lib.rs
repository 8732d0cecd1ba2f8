//! # weather-gateway
//!
//! HTTP fetch-trigger and WebSocket broadcast gateway for live weather
//! updates.
//!
//! A client POSTs a city name; the gateway fetches fresh data from an
//! external weather webhook, validates its shape, and pushes the resulting
//! event to every connected WebSocket subscriber, regardless of which
//! client triggered the fetch. Nothing is persisted: subscribers only see
//! events broadcast while they are connected.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP trigger, WebSocket subscribers)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Connections (ws/)
//!     │
//!     ├── WeatherService (service/)
//!     │       │
//!     │       └── WebhookClient (provider/)  ──► external weather webhook
//!     │
//!     ├── Broadcaster (domain/)
//!     └── SubscriberRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod server;
pub mod service;
pub mod ws;

//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::SubscriberRegistry;
use crate::service::WeatherService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Built once at server start; the registry and service live for the
/// lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather service for the fetch relay.
    pub weather_service: Arc<WeatherService>,
    /// Registry of live WebSocket subscribers.
    pub registry: Arc<SubscriberRegistry>,
}

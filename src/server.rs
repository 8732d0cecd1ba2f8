//! HTTP application composition.
//!
//! Shared between the binary entry point and the integration tests so both
//! mount exactly the same routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::config::GatewayConfig;
use crate::domain::{Broadcaster, SubscriberRegistry};
use crate::error::GatewayError;
use crate::provider::WebhookClient;
use crate::service::WeatherService;
use crate::ws::handler::ws_handler;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns [`GatewayError::Internal`] if the upstream HTTP client cannot
/// be constructed.
pub fn build_state(config: &GatewayConfig) -> Result<AppState, GatewayError> {
    let registry = Arc::new(SubscriberRegistry::new());
    let broadcaster = Broadcaster::new(Arc::clone(&registry));
    let provider = WebhookClient::new(config)?;
    let weather_service = Arc::new(WeatherService::new(provider, broadcaster));

    Ok(AppState {
        weather_service,
        registry,
    })
}

/// Builds the full application router: REST endpoints, the WebSocket
/// upgrade route, and the middleware stack.
#[must_use]
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted under `/api`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the gateway REST surface.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(handlers::system::health_handler, handlers::weather::get_weather),
    components(schemas(
        crate::api::dto::FetchWeatherRequest,
        crate::api::dto::FetchWeatherResponse,
        crate::error::ErrorResponse,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Weather", description = "Fetch-trigger endpoints"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
#[must_use]
pub fn build_router() -> Router<AppState> {
    let router = Router::new().nest("/api", handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

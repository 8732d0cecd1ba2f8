//! Fetch-trigger endpoint handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{FetchWeatherRequest, FetchWeatherResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/get-weather` — Fetch fresh weather data and broadcast it to
/// every connected subscriber.
///
/// The response reflects only the fetch leg: whether individual subscribers
/// received the broadcast is never surfaced here.
///
/// # Errors
///
/// Returns [`GatewayError`] when the city is missing/empty or the upstream
/// call or its payload validation fails.
#[utoipa::path(
    post,
    path = "/api/get-weather",
    tag = "Weather",
    summary = "Trigger a weather fetch and broadcast",
    description = "Calls the external weather provider for the given city and pushes the \
                   result to all connected WebSocket subscribers.",
    request_body = FetchWeatherRequest,
    responses(
        (status = 200, description = "Weather fetched and broadcast", body = FetchWeatherResponse),
        (status = 400, description = "City missing or empty", body = ErrorResponse),
        (status = 500, description = "Upstream call or validation failed", body = ErrorResponse),
    )
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Json(req): Json<FetchWeatherRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    state.weather_service.fetch_and_broadcast(&req.city).await?;
    Ok(Json(FetchWeatherResponse::broadcasted()))
}

/// Weather routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/get-weather", post(get_weather))
}

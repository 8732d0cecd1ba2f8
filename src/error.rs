//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to an HTTP status code and the fixed client-facing JSON body of the
//! trigger endpoint contract. Internal detail (upstream error bodies, reqwest
//! causes) lives in the `Display` output and is only ever logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Flat JSON error body returned to clients.
///
/// ```json
/// { "error": "City is required." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Sanitized, human-readable error message.
    pub error: String,
}

/// Server-side error enum covering every failure class of the fetch path.
///
/// Per-subscriber delivery failures are not represented here: they are
/// handled (and pruned) inside the broadcaster and never propagate to a
/// request handler.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Caller supplied no place name (missing or empty `city`).
    #[error("missing city in fetch request")]
    MissingCity,

    /// The weather provider was unreachable or answered with an error status.
    #[error("weather provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The weather provider answered, but the payload failed shape validation.
    #[error("invalid weather payload from provider: {0}")]
    UpstreamDataInvalid(String),

    /// Unexpected internal failure (e.g. HTTP client construction).
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCity => StatusCode::BAD_REQUEST,
            Self::UpstreamUnavailable(_) | Self::UpstreamDataInvalid(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the fixed message echoed to the requesting client.
    ///
    /// Upstream failures are deliberately indistinguishable on the wire;
    /// the cause is logged, never echoed.
    #[must_use]
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::MissingCity => "City is required.",
            Self::UpstreamUnavailable(_) | Self::UpstreamDataInvalid(_) => {
                "Failed to fetch weather data."
            }
            Self::Internal(_) => "Internal server error.",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.client_message().to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

//! DTOs for the fetch-trigger endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/get-weather`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FetchWeatherRequest {
    /// Place name to fetch weather for. A missing field is treated the
    /// same as an empty one and rejected with 400.
    #[serde(default)]
    pub city: String,
}

/// Success body for `POST /api/get-weather`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FetchWeatherResponse {
    /// Fixed confirmation message.
    pub message: String,
}

impl FetchWeatherResponse {
    /// The confirmation returned after a successful fetch-and-broadcast.
    #[must_use]
    pub fn broadcasted() -> Self {
        Self {
            message: "Weather data fetched and broadcasted successfully.".to_string(),
        }
    }
}

//! Validated weather payload broadcast to subscribers.
//!
//! The external provider answers with a JSON array; the first element is the
//! observation of interest. [`WeatherEvent::from_provider_response`] enforces
//! the shape contract and everything past validation is treated as opaque:
//! the gateway forwards the element to subscribers verbatim, without
//! interpreting or transforming fields.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayError;

/// A shape-validated weather observation.
///
/// Guaranteed to be a JSON object carrying `location` and `current` member
/// objects (the upstream contract also promises a display name, temperature,
/// condition descriptor, humidity, and wind speed inside those members, but
/// that contract is documented rather than enforced).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeatherEvent(Value);

impl WeatherEvent {
    /// Validates a raw provider response and extracts the Weather Event.
    ///
    /// The response must be a non-empty JSON array whose first element is an
    /// object with `location` and `current` members, both objects themselves.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UpstreamDataInvalid`] on any shape deviation.
    pub fn from_provider_response(response: Value) -> Result<Self, GatewayError> {
        let Value::Array(mut items) = response else {
            return Err(GatewayError::UpstreamDataInvalid(
                "response is not an array".to_string(),
            ));
        };
        if items.is_empty() {
            return Err(GatewayError::UpstreamDataInvalid(
                "response array is empty".to_string(),
            ));
        }
        let first = items.swap_remove(0);

        if !first.get("location").is_some_and(Value::is_object) {
            return Err(GatewayError::UpstreamDataInvalid(
                "first element lacks a location object".to_string(),
            ));
        }
        if !first.get("current").is_some_and(Value::is_object) {
            return Err(GatewayError::UpstreamDataInvalid(
                "first element lacks a current object".to_string(),
            ));
        }

        Ok(Self(first))
    }

    /// Returns the location display name, if the provider included one.
    ///
    /// Used for log context only; absence is not an error.
    #[must_use]
    pub fn location_name(&self) -> Option<&str> {
        self.0.get("location")?.get("name")?.as_str()
    }

    /// Serializes the event to the exact JSON text sent to subscribers.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

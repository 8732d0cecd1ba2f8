//! Weather service: the fetch-and-broadcast relay transaction.

use crate::domain::{Broadcaster, WeatherEvent};
use crate::error::GatewayError;
use crate::provider::WebhookClient;

/// Orchestrates a single fetch relay transaction.
///
/// Stateless coordinator: owns the [`WebhookClient`] for upstream calls and
/// the [`Broadcaster`] for fan-out. Every call follows the pattern:
/// validate input → call provider → validate response shape → broadcast →
/// return. Concurrent calls are independent; identical in-flight place
/// names are not coalesced.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: WebhookClient,
    broadcaster: Broadcaster,
}

impl WeatherService {
    /// Creates a new `WeatherService`.
    #[must_use]
    pub fn new(provider: WebhookClient, broadcaster: Broadcaster) -> Self {
        Self {
            provider,
            broadcaster,
        }
    }

    /// Fetches fresh weather data for `city` and broadcasts it to every
    /// live subscriber.
    ///
    /// The returned event reflects upstream-call and validation outcomes
    /// only; per-subscriber delivery results never influence it.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::MissingCity`] if `city` is empty or whitespace.
    ///   The provider is not called in this case.
    /// - [`GatewayError::UpstreamUnavailable`] if the provider call fails.
    /// - [`GatewayError::UpstreamDataInvalid`] if the response shape is off.
    pub async fn fetch_and_broadcast(&self, city: &str) -> Result<WeatherEvent, GatewayError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(GatewayError::MissingCity);
        }

        let response = self.provider.fetch(city).await.inspect_err(|e| {
            tracing::error!(city, error = %e, "weather fetch failed");
        })?;

        let event = WeatherEvent::from_provider_response(response).inspect_err(|e| {
            tracing::error!(city, error = %e, "weather payload rejected");
        })?;

        let delivered = self.broadcaster.broadcast(&event).await;
        tracing::info!(
            city,
            location = event.location_name().unwrap_or_default(),
            delivered,
            "weather event broadcast"
        );

        Ok(event)
    }
}

//! HTTP client for the external weather webhook.

use std::time::Duration;

use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Thin client around the provider webhook.
///
/// Owns one [`reqwest::Client`], built once at startup and reused for every
/// fetch. The only timeout applied is the transport's own request timeout.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// Creates a client for the webhook configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Internal(format!("http client construction: {e}")))?;

        Ok(Self {
            http,
            url: config.webhook_url.clone(),
        })
    }

    /// Fetches fresh weather data for `place`.
    ///
    /// Sends `POST { "name": place }` and returns the raw JSON response
    /// body without interpreting it.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::UpstreamUnavailable`] on connection failure,
    ///   timeout, or a non-success status.
    /// - [`GatewayError::UpstreamDataInvalid`] if the body is not JSON.
    pub async fn fetch(&self, place: &str) -> Result<Value, GatewayError> {
        let response = self
            .http
            .post(&self.url)
            .json(&serde_json::json!({ "name": place }))
            .send()
            .await
            .map_err(|e| GatewayError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamUnavailable(format!(
                "webhook answered {status}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::UpstreamDataInvalid(format!("body is not JSON: {e}")))
    }
}

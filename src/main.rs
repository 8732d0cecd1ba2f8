//! weather-gateway server entry point.
//!
//! Starts the Axum HTTP server with the fetch-trigger REST endpoints and
//! the WebSocket broadcast endpoint.

use tracing_subscriber::EnvFilter;

use weather_gateway::config::GatewayConfig;
use weather_gateway::server::{build_app, build_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, webhook = %config.webhook_url, "starting weather-gateway");

    // Build state and router
    let state = build_state(&config)?;
    let app = build_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

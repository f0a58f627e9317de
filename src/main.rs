//! # Timezone Bridge Main Entry Point
//!
//! Initializes logging, loads configuration, binds the timezone query
//! handler to its channel, and serves the call gateway and health endpoints
//! to the embedding host.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timezone_bridge::channel::ChannelRegistry;
use timezone_bridge::config::Config;
use timezone_bridge::handlers::{TimezoneQueryHandler, TIMEZONE_CHANNEL};
use timezone_bridge::providers::SystemTimezoneProvider;
use timezone_bridge::services::gateway::GatewayService;
use timezone_bridge::services::health::HealthService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timezone_bridge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Timezone Bridge v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - HTTP Port: {}", config.http_port);

    // Bind the timezone handler to its channel; this is the one-time
    // registration point for the service
    let mut registry = ChannelRegistry::new();
    let provider = Arc::new(SystemTimezoneProvider::new());
    registry.register(
        TIMEZONE_CHANNEL,
        Arc::new(TimezoneQueryHandler::new(provider)),
    )?;
    let registry = Arc::new(registry);
    info!("Timezone channel bound successfully");

    // Build the HTTP surface
    let gateway_service = GatewayService::new(registry.clone());
    let health_service = HealthService::new(registry);
    let app = gateway_service.router.merge(health_service.router);

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        config.bind_address, config.http_port
    ))
    .await
    .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Call gateway listening on port {}", config.http_port);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Gateway server error: {}", e);
        return Err(anyhow::anyhow!("Gateway server error: {}", e));
    }

    info!("Application stopped");
    Ok(())
}

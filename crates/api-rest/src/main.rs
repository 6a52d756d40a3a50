//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and for deployments that only need HTTP (with OpenAPI/Swagger UI). The
//! workspace's main `sirs-run` binary runs both gRPC and REST concurrently.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sirs_core::ServerConfig;

/// Main entry point for the SIRS REST API server
///
/// # Environment Variables
/// - `SIRS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;

    tracing::info!("-- Starting SIRS REST API on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, api_rest::router()).await?;

    Ok(())
}

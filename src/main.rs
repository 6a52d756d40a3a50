use std::future::{Future, IntoFuture};

use anyhow::Context;
use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{ApiKeyInterceptor, SirsService, pb::sirs_server::SirsServer};
use api_shared::FILE_DESCRIPTOR_SET;
use sirs_core::ServerConfig;

/// Main entry point for the SIRS calculator
///
/// Starts both gRPC and REST servers concurrently:
/// - gRPC server on port 50051 (configurable via SIRS_ADDR)
/// - REST server on port 3000 (configurable via SIRS_REST_ADDR)
///
/// The gRPC server checks the x-api-key header against API_KEY. Without API_KEY it rejects
/// every request unless SIRS_ALLOW_UNAUTHENTICATED is true.
/// The REST server provides open access to the calculator.
///
/// # Environment Variables
/// - `SIRS_ADDR`: gRPC server address (default: "0.0.0.0:50051")
/// - `SIRS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `API_KEY`: API key for gRPC authentication
/// - `SIRS_ENABLE_REFLECTION`: enable gRPC reflection (default: "false")
/// - `SIRS_ALLOW_UNAUTHENTICATED`: serve gRPC without API_KEY (default: "false")
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If configuration or startup fails, or either server stops
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("sirs=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;

    tracing::info!("++ Starting SIRS gRPC on {}", cfg.grpc_addr());
    tracing::info!("++ Starting SIRS REST on {}", cfg.rest_addr());
    if cfg.api_key().is_none() {
        if cfg.allow_unauthenticated() {
            tracing::warn!("API_KEY not set; serving gRPC without authentication");
        } else {
            tracing::warn!("API_KEY not set; gRPC requests will be rejected");
        }
    }

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    let rest_server = axum::serve(listener, api_rest::router()).into_future();

    let mut grpc_builder = Server::builder().add_service(SirsServer::with_interceptor(
        SirsService::default(),
        ApiKeyInterceptor::new(cfg.api_key(), cfg.allow_unauthenticated()),
    ));
    if cfg.enable_reflection() {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        grpc_builder = grpc_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    }
    let grpc_server = grpc_builder.serve(cfg.grpc_addr());

    serve_until_first_exit(rest_server, grpc_server).await
}

/// Drives both servers and returns as soon as either one stops.
///
/// Neither server exits while healthy, so any return is reported as an error.
async fn serve_until_first_exit<R, G, RE, GE>(rest: R, grpc: G) -> anyhow::Result<()>
where
    R: Future<Output = Result<(), RE>>,
    G: Future<Output = Result<(), GE>>,
    RE: Into<anyhow::Error>,
    GE: Into<anyhow::Error>,
{
    tokio::select! {
        res = rest => {
            res.map_err(Into::<anyhow::Error>::into).context("REST server failed")?;
            anyhow::bail!("REST server stopped")
        }
        res = grpc => {
            res.map_err(Into::<anyhow::Error>::into).context("gRPC server failed")?;
            anyhow::bail!("gRPC server stopped")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn test_grpc_failure_is_reported_while_rest_runs() {
        let rest = std::future::pending::<Result<(), io::Error>>();
        let grpc = async { Err::<(), _>(io::Error::from(io::ErrorKind::AddrInUse)) };

        let err = serve_until_first_exit(rest, grpc).await.unwrap_err();
        assert_eq!(err.to_string(), "gRPC server failed");
        assert!(err.root_cause().downcast_ref::<io::Error>().is_some());
    }

    #[tokio::test]
    async fn test_rest_failure_is_reported_while_grpc_runs() {
        let rest = async { Err::<(), _>(io::Error::from(io::ErrorKind::ConnectionReset)) };
        let grpc = std::future::pending::<Result<(), io::Error>>();

        let err = serve_until_first_exit(rest, grpc).await.unwrap_err();
        assert_eq!(err.to_string(), "REST server failed");
    }

    #[tokio::test]
    async fn test_clean_exit_is_still_an_error() {
        let rest = std::future::pending::<Result<(), io::Error>>();
        let grpc = async { Ok::<(), io::Error>(()) };

        let err = serve_until_first_exit(rest, grpc).await.unwrap_err();
        assert_eq!(err.to_string(), "gRPC server stopped");
    }
}

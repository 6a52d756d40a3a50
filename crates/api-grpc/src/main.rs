use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{pb::sirs_server::SirsServer, ApiKeyInterceptor, SirsService};
use api_shared::FILE_DESCRIPTOR_SET;
use sirs_core::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("sirs=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;

    tracing::info!("-- Starting SIRS gRPC on {}", cfg.grpc_addr());
    if cfg.api_key().is_none() {
        if cfg.allow_unauthenticated() {
            tracing::warn!("API_KEY not set; serving gRPC without authentication");
        } else {
            tracing::warn!("API_KEY not set; gRPC requests will be rejected");
        }
    }

    let mut server_builder = Server::builder().add_service(SirsServer::with_interceptor(
        SirsService::default(),
        ApiKeyInterceptor::new(cfg.api_key(), cfg.allow_unauthenticated()),
    ));

    if cfg.enable_reflection() {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        server_builder = server_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    } else {
        tracing::info!("gRPC server reflection disabled");
    }

    server_builder.serve(cfg.grpc_addr()).await?;

    Ok(())
}

//! Binary entry point: serve all built-in resources over HTTP

use registra::config::ServerConfig;
use registra::server::ServerBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_yaml_file(&path)?,
        None => ServerConfig::default(),
    };

    ServerBuilder::new()
        .with_default_resources()
        .serve(&config.bind_addr())
        .await
}

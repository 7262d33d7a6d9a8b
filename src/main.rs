//! # Medmock API Main Entry Point

use anyhow::Context;
use medmock::{config::ConfigLoader, server::run_server, telemetry::init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from layered env files and variables
    let config = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    init_tracing(&config).context("failed to initialize tracing")?;

    info!(profile = %config.profile, "loaded configuration");
    if let Ok(json) = config.to_pretty_json() {
        info!("configuration: {json}");
    }

    run_server(config).await.context("server exited with an error")
}

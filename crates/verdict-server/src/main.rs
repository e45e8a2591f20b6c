//! Verdict Server - standalone entry point for the debate-judging API
//!
//! This crate is a thin wrapper around `verdict-api` providing a runnable
//! binary for deployments without touching the library crates.

use anyhow::{Context, Result};
use verdict_api::{ModelConfig, ServerConfig, VerdictServer};

#[tokio::main]
async fn main() -> Result<()> {
    verdict_api::server::init_tracing();

    tracing::info!("Starting Verdict server...");

    // Map a platform-provided $PORT to VERDICT_PORT when unset.
    if let Ok(port) = std::env::var("PORT") {
        if std::env::var("VERDICT_PORT").is_err() {
            tracing::info!("Mapping PORT {} to VERDICT_PORT", port);
            std::env::set_var("VERDICT_PORT", port);
        }
    }

    let config = ServerConfig::from_env();
    let models = ModelConfig::from_env().context("model configuration")?;

    // Model loading is fatal on failure: never serve without both models.
    let server = VerdictServer::new(config, &models).map_err(|e| {
        tracing::error!("Failed to initialize server: {}", e);
        anyhow::anyhow!(e)
    })?;

    server.run().await.map_err(|e| {
        tracing::error!("Server error during execution: {}", e);
        anyhow::anyhow!(e)
    })?;

    Ok(())
}

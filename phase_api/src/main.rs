// Phase Change Diagram API Server Binary
//
// Entry point for the phase change diagram API server.

use anyhow::Result;
use clap::Parser;

use phase_api::{ApiServer, ServeArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServeArgs::parse().resolve()?;

    // Initialize tracing/logging
    observability::init_tracing(&config.tracing())?;

    tracing::info!(address = %config.bind_address(), "Starting phase change diagram API server");

    ApiServer::new(config).run().await
}

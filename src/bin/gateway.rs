//! Gateway entry point
//!
//! `PORT` (default 3000), `USER_SERVICE_URL`, `ORDER_SERVICE_URL`.

use anyhow::Context;
use dashboard_mesh::config::{AppConfig, GATEWAY_PORT};
use dashboard_mesh::{gateway, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(GATEWAY_PORT).context("Failed to load configuration")?;
    let _log_guard = logging::init_logging(&config.log);

    tracing::info!("Starting {}", gateway::SERVICE_NAME);
    let app = gateway::app(&config).context("Failed to initialize gateway")?;

    let listener = server::bind(&config.server).await?;
    server::serve(listener, app, gateway::SERVICE_NAME).await
}

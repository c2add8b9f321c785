use anyhow::Context;
use dashboard_mesh::config::{AppConfig, USER_SERVICE_PORT};
use dashboard_mesh::services::user;
use dashboard_mesh::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(USER_SERVICE_PORT).context("Failed to load configuration")?;
    let _log_guard = logging::init_logging(&config.log);

    let listener = server::bind(&config.server).await?;
    server::serve(listener, user::router(), user::SERVICE_NAME).await
}

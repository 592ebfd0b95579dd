//! Attendance engine HTTP server.

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directory holding `server.yaml` and `locale.yaml`.
const CONFIG_DIR_ENV: &str = "ATTENDANCE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let address = config.server().address();
    info!(
        config_dir = %config_dir,
        timezone = %config.server().timezone,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, version = env!("CARGO_PKG_VERSION"), "Attendance engine listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}

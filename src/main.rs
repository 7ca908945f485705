//! HTTP server for the wage comparison engine.
//!
//! Reads configuration from the directory named by `WAGE_ENGINE_CONFIG`
//! (default `./config`) and serves the API on the configured address.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wage_engine::api::{create_router, AppState};
use wage_engine::calculation::TAX_YEAR;
use wage_engine::config::ConfigLoader;

const CONFIG_DIR_VAR: &str = "WAGE_ENGINE_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wage_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir).inspect_err(|err| {
        tracing::error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
    })?;

    let bind_address = config.service().bind_address.clone();
    tracing::info!(
        service = %config.service().name,
        tax_year = TAX_YEAR,
        config_dir = %config_dir,
        "Starting wage comparison service"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    tracing::info!("Server started at http://{}", bind_address);
    axum::serve(listener, router).await?;

    Ok(())
}

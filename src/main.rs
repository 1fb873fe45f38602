//! HTTP server for the Activity Engine.
//!
//! Reads thresholds from the directory in `ACTIVITY_ENGINE_CONFIG` (built-in
//! defaults when unset) and listens on `ACTIVITY_ENGINE_ADDR`
//! (default `0.0.0.0:3000`).

use activity_engine::api::{AppState, create_router};
use activity_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match std::env::var("ACTIVITY_ENGINE_CONFIG") {
        Ok(dir) => ConfigLoader::load(&dir)?,
        Err(_) => {
            info!("ACTIVITY_ENGINE_CONFIG not set, using built-in thresholds");
            ConfigLoader::builtin()
        }
    };

    let app = create_router(AppState::from(loader));

    let addr = std::env::var("ACTIVITY_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

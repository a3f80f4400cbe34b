//! Showroom host: serves the server-rendered storefront and its static files.

mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "showroom failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| ServeError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(&config, leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), "showroom listening");
    axum::serve(listener, app).await?;
    Ok(())
}

//! Maildeck Web Server
//!
//! Run with: cargo run -p maildeck-web

use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use maildeck_common::config::Config;
use maildeck_web::router::build_router;
use maildeck_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Maildeck web server...");

    let config = Config::from_env();
    config.validate()?;
    match &config.backend_url {
        Some(url) => info!(backend = %url, "backend origin configured"),
        None => warn!("API_URL not set; pages use the local default, /api/proxy will answer 500"),
    }

    let port = config.port;
    let state = AppState::new(config)?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

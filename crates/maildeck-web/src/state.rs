//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use maildeck_client::ContentApi;
use maildeck_common::config::Config;

/// Relay budget. Slightly longer than the typed client's so the proxy can
/// survive backend cold starts the dashboard would give up on.
const PROXY_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Typed client used by the server-rendered pages.
    pub api: ContentApi,
    /// Plain HTTP client used by the proxy relay and diagnostics.
    pub proxy: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api = ContentApi::from_config(&config)?;
        let proxy = reqwest::ClientBuilder::new()
            .timeout(PROXY_TIMEOUT)
            .build()?;
        Ok(Self { config, api, proxy })
    }
}

pub type SharedState = Arc<AppState>;

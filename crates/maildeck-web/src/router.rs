//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    content::content_page,
    dashboard::dashboard,
    diag::{debug_env, test_backend},
    proxy::{proxy_get, proxy_post, proxy_preflight},
    search::{search_page, search_submit},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",              get(dashboard))
        .route("/search",        get(search_page).post(search_submit))
        .route("/contents/{id}", get(content_page))

        // Reverse relay onto the configured backend
        .route("/api/proxy/{*path}", get(proxy_get).post(proxy_post).options(proxy_preflight))

        // Deploy diagnostics
        .route("/api/test-backend", get(test_backend))
        .route("/api/debug-env",    get(debug_env))

        // Static files
        .nest_service("/static", ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

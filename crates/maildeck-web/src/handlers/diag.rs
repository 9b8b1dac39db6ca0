//! Deploy diagnostics — quick checks for "is the backend reachable" and
//! "is the environment wired up", for debugging hosted deployments.

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::error;

use crate::state::SharedState;

/// Probe budget, shorter than the relay's: this endpoint is for a human
/// watching a deploy, not for real traffic.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// GET /api/test-backend — one probe of `{base}/contents/`.
pub async fn test_backend(State(state): State<SharedState>) -> Response {
    let backend_url = match state.config.backend_origin() {
        Ok(origin) => origin.to_string(),
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "error": "API_URL environment variable is not set",
                    "message": "Set API_URL in the deploy environment",
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
                .into_response();
        }
    };

    let url = format!("{}/contents/", backend_url);
    let result = state
        .proxy
        .get(&url)
        .timeout(PROBE_TIMEOUT)
        .send()
        .await;

    match result {
        Ok(resp) if resp.status().is_success() => {
            let response_status = resp.status().as_u16();
            let item_count = resp
                .json::<Vec<Value>>()
                .await
                .map(|items| items.len())
                .ok();
            Json(json!({
                "status": "success",
                "backend_url": url,
                "response_status": response_status,
                "item_count": item_count,
                "timestamp": Utc::now().to_rfc3339(),
                "message": "Backend connection successful",
            }))
            .into_response()
        }
        Ok(resp) => {
            error!(status = resp.status().as_u16(), %url, "backend probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "backend_url": url,
                    "error": format!("Backend responded with status {}", resp.status()),
                    "timestamp": Utc::now().to_rfc3339(),
                    "message": "Backend connection failed",
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, %url, "backend probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "backend_url": url,
                    "error": e.to_string(),
                    "timestamp": Utc::now().to_rfc3339(),
                    "message": "Backend connection failed",
                })),
            )
                .into_response()
        }
    }
}

/// GET /api/debug-env — which configuration the server actually booted with.
pub async fn debug_env(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "message": "Environment configuration debug",
        "timestamp": Utc::now().to_rfc3339(),
        "api_url_set": state.config.backend_url.is_some(),
        "backend_url": state.config.backend_url,
        "port": state.config.port,
    }))
}

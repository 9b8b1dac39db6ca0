//! Reverse relay: `/api/proxy/{*path}` → `<backend origin>/<path>`.
//!
//! Exists so the browser only ever talks to this origin; the backend's CORS
//! policy never comes into play. Forwards method, JSON body, and a fixed
//! header set; relays the backend's status and JSON body back with
//! permissive CORS headers added. No rate limiting, no authentication,
//! no streaming.

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::state::SharedState;

pub async fn proxy_get(
    State(state): State<SharedState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    relay(&state, Method::GET, &path, query, None).await
}

pub async fn proxy_post(
    State(state): State<SharedState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    Json(body): Json<Value>,
) -> Response {
    relay(&state, Method::POST, &path, query, Some(body)).await
}

/// CORS preflight for the relay surface.
pub async fn proxy_preflight() -> Response {
    (StatusCode::OK, cors_headers()).into_response()
}

async fn relay(
    state: &SharedState,
    method: Method,
    path: &str,
    query: Option<String>,
    body: Option<Value>,
) -> Response {
    let origin = match state.config.backend_origin() {
        Ok(origin) => origin,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({
                    "error": "API_URL not set",
                    "message": "Set API_URL to the backend origin in the deploy environment",
                })),
            )
                .into_response();
        }
    };

    // Rewrite /api/proxy/<path>?<query> onto the backend origin.
    let mut url = format!("{}/{}", origin.trim_end_matches('/'), path);
    if let Some(q) = &query {
        url.push('?');
        url.push_str(q);
    }

    debug!(%method, %url, "relaying request to backend");

    let mut req = state
        .proxy
        .request(method, &url)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json");
    if let Some(body) = &body {
        req = req.json(body);
    }

    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!(error = %e, %url, "proxy request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({
                    "error": "Proxy request failed",
                    "message": e.to_string(),
                    "url": url,
                })),
            )
                .into_response();
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let detail = resp.text().await.unwrap_or_default();
        error!(status = status.as_u16(), %url, "backend request failed");
        return (
            status,
            cors_headers(),
            Json(json!({
                "error": "Backend request failed",
                "status": status.as_u16(),
                "url": url,
                "detail": detail,
            })),
        )
            .into_response();
    }

    match resp.json::<Value>().await {
        Ok(data) => (status, cors_headers(), Json(data)).into_response(),
        Err(e) => {
            error!(error = %e, %url, "backend returned unparseable body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({
                    "error": "Proxy request failed",
                    "message": format!("backend body was not JSON: {e}"),
                    "url": url,
                })),
            )
                .into_response()
        }
    }
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers
}

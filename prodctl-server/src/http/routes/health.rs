//! Service status endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::state::AppState;
use crate::models::PageWindow;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub service: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// GET /health - 200 while the product store answers, 503 once it doesn't.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let (code, store) = match state.store().fetch_page(PageWindow::new(0, 1)).await {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("health check: store unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let body = HealthStatus {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        store,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

//! Leaf services
//!
//! Each leaf answers with a fixed list and has no downstream dependencies.
//! Both share the same probe endpoints:
//!
//! - `GET /health` → `{"status":"UP"}`
//! - `GET /test` → `OK` (text)

pub mod order;
pub mod user;

use axum::{Json, Router, http::StatusCode, routing::get};

use crate::models::HealthStatus;

/// Liveness probe
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::up())
}

/// Smoke-test probe
pub async fn smoke_test() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Probe routes every leaf mounts next to its data route.
pub(crate) fn probe_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/test", get(smoke_test))
}

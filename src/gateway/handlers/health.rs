//! Health check and API document handlers

use axum::{Json, http::StatusCode};
use utoipa::OpenApi;

use super::super::openapi::ApiDoc;

/// Health check endpoint
///
/// Reports the gateway process only; it does not probe the leaf services.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Gateway is running", body = String, content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Serve the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

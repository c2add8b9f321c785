//! Dashboard handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::error::GatewayError;
use super::super::services::DashboardService;
use super::super::state::AppState;
use crate::models::{DashboardResponse, ErrorBody};

/// Aggregated dashboard
///
/// Calls the user and order services concurrently and merges the results.
/// Any downstream failure (unreachable, non-2xx, timeout, bad body) turns the
/// whole response into a 500; there is no partial payload.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Users and orders merged", body = DashboardResponse, content_type = "application/json"),
        (status = 500, description = "A downstream service failed", body = ErrorBody, content_type = "application/json")
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, GatewayError> {
    match DashboardService::new(&state.downstream).aggregate().await {
        Ok(dashboard) => Ok(Json(dashboard)),
        Err(e) => {
            tracing::error!(
                service = e.service().map(|s| s.name()).unwrap_or("gateway"),
                timeout = e.is_timeout(),
                "Service communication failed: {}",
                e
            );
            Err(e)
        }
    }
}

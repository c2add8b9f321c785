//! Aggregating gateway
//!
//! ```text
//!                                 GET /users   ┌───────────────┐
//!           ┌─────────────────┐ ─────────────▶ │ User service  │
//! client ──▶│     Gateway     │                └───────────────┘
//!           │ /api/dashboard  │  GET /orders   ┌───────────────┐
//!           └─────────────────┘ ─────────────▶ │ Order service │
//!                                              └───────────────┘
//! ```

pub mod client;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::config::AppConfig;
use client::DownstreamClient;
use state::AppState;

pub const SERVICE_NAME: &str = "Gateway";

/// Build the gateway router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(handlers::openapi_json))
        .with_state(state)
}

/// Build state and router from configuration.
pub fn app(config: &AppConfig) -> Result<Router, error::GatewayError> {
    let downstream = DownstreamClient::new(&config.gateway)?;
    tracing::info!("  → users:  {}", downstream.users_url());
    tracing::info!("  → orders: {}", downstream.orders_url());
    tracing::info!(
        "  → downstream timeout: {} ms",
        config.gateway.request_timeout_ms
    );
    Ok(router(Arc::new(AppState::new(downstream))))
}

//! Order service: `GET /orders`

use axum::{Json, Router, routing::get};

use crate::models::{Order, order_fixtures};

pub const SERVICE_NAME: &str = "Order service";

pub fn router() -> Router {
    Router::new()
        .route("/orders", get(list_orders))
        .merge(super::probe_routes())
}

pub async fn list_orders() -> Json<Vec<Order>> {
    Json(order_fixtures())
}

//! User service: `GET /users`

use axum::{Json, Router, routing::get};

use crate::models::{User, user_fixtures};

pub const SERVICE_NAME: &str = "User service";

pub fn router() -> Router {
    Router::new()
        .route("/users", get(list_users))
        .merge(super::probe_routes())
}

pub async fn list_users() -> Json<Vec<User>> {
    Json(user_fixtures())
}

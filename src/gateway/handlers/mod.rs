//! Gateway HTTP handlers

pub mod dashboard;
pub mod health;

pub use dashboard::get_dashboard;
pub use health::{health_check, openapi_json};

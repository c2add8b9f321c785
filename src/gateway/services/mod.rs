//! Gateway Services Layer
//!
//! Handlers stay thin HTTP adapters; the fan-out/fan-in lives here.

pub mod dashboard;

pub use dashboard::{DashboardService, DashboardSource};

//! Dashboard Mesh - a gateway over two static leaf services
//!
//! # Modules
//!
//! - [`config`] - Layered configuration (defaults, YAML, environment)
//! - [`logging`] - `tracing` subscriber setup
//! - [`models`] - User, Order and dashboard wire types
//! - [`services`] - The user and order leaf services
//! - [`gateway`] - Fan-out/fan-in dashboard gateway
//! - [`server`] - Listener binding and graceful shutdown

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod server;
pub mod services;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError, GatewayConfig};
pub use gateway::error::GatewayError;
pub use models::{DashboardResponse, Order, User};

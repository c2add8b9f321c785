//! Shared helpers: run routers on ephemeral ports.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use dashboard_mesh::config::GatewayConfig;
use dashboard_mesh::services::{order, user};
use dashboard_mesh::{AppConfig, gateway};
use tokio::net::TcpListener;

/// Serve `app` on 127.0.0.1 with an OS-assigned port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address with nothing listening on it.
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub async fn spawn_user_service() -> SocketAddr {
    spawn(user::router()).await
}

pub async fn spawn_order_service() -> SocketAddr {
    spawn(order::router()).await
}

/// Start a gateway wired to the given leaf addresses.
pub async fn spawn_gateway(users: SocketAddr, orders: SocketAddr, timeout_ms: u64) -> SocketAddr {
    let config = AppConfig {
        gateway: GatewayConfig {
            user_service_url: format!("http://{}", users),
            order_service_url: format!("http://{}", orders),
            request_timeout_ms: timeout_ms,
            ..GatewayConfig::default()
        },
        ..AppConfig::default()
    };
    spawn(gateway::app(&config).unwrap()).await
}

//! HTTP client for the two leaf services

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::error::{Downstream, GatewayError};
use crate::config::GatewayConfig;
use crate::models::{Order, User};

/// Shared client for outbound calls.
///
/// `reqwest::Client` pools connections internally, so clones are cheap and
/// share the pool.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    http: reqwest::Client,
    users_url: String,
    orders_url: String,
}

impl DownstreamClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(GatewayError::ClientBuild)?;

        Ok(Self {
            http,
            users_url: endpoint(&config.user_service_url, "users"),
            orders_url: endpoint(&config.order_service_url, "orders"),
        })
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    pub fn orders_url(&self) -> &str {
        &self.orders_url
    }

    /// GET {USER_SERVICE_URL}/users
    pub async fn fetch_users(&self) -> Result<Vec<User>, GatewayError> {
        self.get_json(Downstream::Users, &self.users_url).await
    }

    /// GET {ORDER_SERVICE_URL}/orders
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, GatewayError> {
        self.get_json(Downstream::Orders, &self.orders_url).await
    }

    async fn get_json<T>(&self, service: Downstream, url: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("[{}] GET {}", service, url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { service, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status { service, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| GatewayError::Decode { service, source })
    }
}

/// Join a configured base URL and a resource path.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint("http://user-service:3001", "users"),
            "http://user-service:3001/users"
        );
        assert_eq!(
            endpoint("http://user-service:3001/", "users"),
            "http://user-service:3001/users"
        );
    }

    #[test]
    fn test_client_uses_configured_urls() {
        let config = GatewayConfig {
            user_service_url: "http://127.0.0.1:9001/".to_string(),
            order_service_url: "http://127.0.0.1:9002".to_string(),
            ..GatewayConfig::default()
        };
        let client = DownstreamClient::new(&config).unwrap();
        assert_eq!(client.users_url(), "http://127.0.0.1:9001/users");
        assert_eq!(client.orders_url(), "http://127.0.0.1:9002/orders");
    }

    #[tokio::test]
    async fn test_unreachable_downstream_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = GatewayConfig {
            user_service_url: format!("http://{}", addr),
            ..GatewayConfig::default()
        };
        let client = DownstreamClient::new(&config).unwrap();

        let err = client.fetch_users().await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Transport {
                service: Downstream::Users,
                ..
            }
        ));
    }
}

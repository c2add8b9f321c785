//! Dashboard aggregation
//!
//! Fetches users and orders concurrently and merges them into one
//! [`DashboardResponse`]. The first failure wins: the sibling call is dropped
//! and no partial payload is produced.

use async_trait::async_trait;

use crate::gateway::client::DownstreamClient;
use crate::gateway::error::GatewayError;
use crate::models::{DashboardResponse, Order, User};

/// Where the dashboard's two lists come from.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn users(&self) -> Result<Vec<User>, GatewayError>;
    async fn orders(&self) -> Result<Vec<Order>, GatewayError>;
}

#[async_trait]
impl DashboardSource for DownstreamClient {
    async fn users(&self) -> Result<Vec<User>, GatewayError> {
        self.fetch_users().await
    }

    async fn orders(&self) -> Result<Vec<Order>, GatewayError> {
        self.fetch_orders().await
    }
}

pub struct DashboardService<'a, S: DashboardSource> {
    source: &'a S,
}

impl<'a, S: DashboardSource> DashboardService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Issue both calls without ordering and wait for both to settle.
    pub async fn aggregate(&self) -> Result<DashboardResponse, GatewayError> {
        let (users, orders) = tokio::try_join!(self.source.users(), self.source.orders())?;

        tracing::debug!(
            "[DASHBOARD] merged {} users, {} orders",
            users.len(),
            orders.len()
        );
        Ok(DashboardResponse::new(users, orders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::error::Downstream;
    use crate::models::{order_fixtures, user_fixtures};
    use axum::http::StatusCode;
    use std::time::Duration;

    /// Test source with per-side behavior
    struct FakeSource {
        users_status: Option<StatusCode>,
        orders_status: Option<StatusCode>,
        users_delay: Duration,
    }

    impl FakeSource {
        fn healthy() -> Self {
            Self {
                users_status: None,
                orders_status: None,
                users_delay: Duration::ZERO,
            }
        }
    }

    #[async_trait]
    impl DashboardSource for FakeSource {
        async fn users(&self) -> Result<Vec<User>, GatewayError> {
            tokio::time::sleep(self.users_delay).await;
            match self.users_status {
                Some(status) => Err(GatewayError::Status {
                    service: Downstream::Users,
                    status,
                }),
                None => Ok(user_fixtures()),
            }
        }

        async fn orders(&self) -> Result<Vec<Order>, GatewayError> {
            match self.orders_status {
                Some(status) => Err(GatewayError::Status {
                    service: Downstream::Orders,
                    status,
                }),
                None => Ok(order_fixtures()),
            }
        }
    }

    #[tokio::test]
    async fn test_aggregate_merges_both_lists() {
        let source = FakeSource::healthy();
        let dashboard = DashboardService::new(&source).aggregate().await.unwrap();

        assert_eq!(dashboard.users, user_fixtures());
        assert_eq!(dashboard.orders, order_fixtures());
        assert_eq!(dashboard.user_count, 2);
        assert_eq!(dashboard.order_count, 2);
    }

    #[tokio::test]
    async fn test_users_failure_fails_aggregate() {
        let source = FakeSource {
            users_status: Some(StatusCode::INTERNAL_SERVER_ERROR),
            ..FakeSource::healthy()
        };
        let err = DashboardService::new(&source).aggregate().await.unwrap_err();
        assert_eq!(err.service(), Some(Downstream::Users));
    }

    #[tokio::test]
    async fn test_orders_failure_fails_aggregate() {
        let source = FakeSource {
            orders_status: Some(StatusCode::BAD_GATEWAY),
            ..FakeSource::healthy()
        };
        let err = DashboardService::new(&source).aggregate().await.unwrap_err();
        assert_eq!(err.service(), Some(Downstream::Orders));
    }

    #[tokio::test]
    async fn test_first_failure_does_not_wait_for_sibling() {
        let source = FakeSource {
            orders_status: Some(StatusCode::SERVICE_UNAVAILABLE),
            users_delay: Duration::from_secs(30),
            ..FakeSource::healthy()
        };

        let result = tokio::time::timeout(
            Duration::from_secs(2),
            DashboardService::new(&source).aggregate(),
        )
        .await
        .expect("aggregate should return as soon as orders fails");

        assert!(result.is_err());
    }
}

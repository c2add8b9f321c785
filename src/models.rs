//! Wire types shared by the leaf services and the gateway
//!
//! - [`User`] / [`Order`]: the two static record kinds
//! - [`DashboardResponse`]: the gateway's merged payload
//! - [`HealthStatus`] / [`ErrorBody`]: fixed probe and failure bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Rajesh")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(example = 101)]
    pub id: u64,
    #[schema(example = "Cement Bags")]
    pub item: String,
}

/// Users served by the user service, in response order
pub fn user_fixtures() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Rajesh".to_string(),
        },
        User {
            id: 2,
            name: "DevOps Engineer".to_string(),
        },
    ]
}

/// Orders served by the order service, in response order
pub fn order_fixtures() -> Vec<Order> {
    vec![
        Order {
            id: 101,
            item: "Cement Bags".to_string(),
        },
        Order {
            id: 102,
            item: "Steel Rods".to_string(),
        },
    ]
}

/// Merged dashboard payload
///
/// Counts always equal the lengths of their lists; [`DashboardResponse::new`]
/// is the only way the gateway builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    #[schema(example = 2)]
    pub user_count: usize,
    #[schema(example = 2)]
    pub order_count: usize,
}

impl DashboardResponse {
    pub fn new(users: Vec<User>, orders: Vec<Order>) -> Self {
        Self {
            user_count: users.len(),
            order_count: orders.len(),
            users,
            orders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "UP")]
    pub status: String,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Service communication failed")]
    pub error: String,
}

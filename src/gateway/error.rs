//! Gateway error types.
//!
//! Every request-time failure is a downstream communication failure. The
//! variant detail is for logs only; callers always see the same 500 body.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::ErrorBody;

/// Message returned to callers for any downstream failure.
pub const SERVICE_COMMUNICATION_FAILED: &str = "Service communication failed";

/// Which leaf service a downstream call targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Downstream {
    Users,
    Orders,
}

impl Downstream {
    pub fn name(self) -> &'static str {
        match self {
            Self::Users => "user-service",
            Self::Orders => "order-service",
        }
    }
}

impl fmt::Display for Downstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: Downstream,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} responded with status {status}")]
    Status {
        service: Downstream,
        status: StatusCode,
    },

    #[error("{service} returned an undecodable body: {source}")]
    Decode {
        service: Downstream,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl GatewayError {
    /// The leaf service involved, if the failure came from a call.
    pub fn service(&self) -> Option<Downstream> {
        match self {
            Self::Transport { service, .. }
            | Self::Status { service, .. }
            | Self::Decode { service, .. } => Some(*service),
            Self::ClientBuild(_) => None,
        }
    }

    /// True when the call hit the configured deadline.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } | Self::Decode { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: SERVICE_COMMUNICATION_FAILED.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

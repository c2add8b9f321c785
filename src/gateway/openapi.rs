//! OpenAPI documentation for the gateway
//!
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::models::{DashboardResponse, ErrorBody, Order, User};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dashboard Gateway API",
        version = "0.1.0",
        description = "Aggregates the user and order services into one dashboard payload.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::dashboard::get_dashboard,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            DashboardResponse,
            User,
            Order,
            ErrorBody,
        )
    ),
    tags(
        (name = "Dashboard", description = "Aggregated views over the leaf services"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Dashboard Gateway API");
        assert_eq!(doc.info.version, "0.1.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/dashboard"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_dashboard_schema_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("should have components");
        assert!(components.schemas.contains_key("DashboardResponse"));
        assert!(components.schemas.contains_key("ErrorBody"));
    }
}

use super::client::DownstreamClient;

/// Gateway application state (shared, read-only)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Outbound client for the leaf services
    pub downstream: DownstreamClient,
}

impl AppState {
    pub fn new(downstream: DownstreamClient) -> Self {
        Self { downstream }
    }
}

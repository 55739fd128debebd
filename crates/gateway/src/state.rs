//! Application state for dependency injection.

use std::sync::Arc;

use crate::clients::UpstreamClient;
use crate::config::GatewayConfig;

/// Application state shared across handlers.
///
/// Holds no per-request data; concurrent requests only share the upstream
/// client's connection pool.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    /// Create new app state.
    pub fn new(upstream: Arc<dyn UpstreamClient>, config: GatewayConfig) -> Self {
        Self {
            upstream,
            config: Arc::new(config),
        }
    }
}

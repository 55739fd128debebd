//! Shared configuration structures.

use std::time::Duration;

use domain::{
    DEFAULT_SERVER_ENDPOINT, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECONDS,
    DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
};
use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "update-gateway".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Upstream HTTP service connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Upstream base URL (e.g., "http://localhost:6767")
    pub endpoint: String,
    /// Whole-request timeout in seconds
    pub timeout_seconds: u64,
    /// Connection timeout in seconds
    pub connect_timeout_seconds: u64,
}

impl UpstreamConfig {
    /// Join a path onto the configured base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SERVER_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
            connect_timeout_seconds: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UPDATE_SYSTEM_PATH;

    #[test]
    fn test_url_for_joins_path() {
        let config = UpstreamConfig {
            endpoint: "http://updates.local:6767".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.url_for(UPDATE_SYSTEM_PATH),
            "http://updates.local:6767/api/update-system/"
        );
    }

    #[test]
    fn test_url_for_trailing_slash() {
        let config = UpstreamConfig {
            endpoint: "http://updates.local:6767/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.url_for(UPDATE_SYSTEM_PATH),
            "http://updates.local:6767/api/update-system/"
        );
    }
}

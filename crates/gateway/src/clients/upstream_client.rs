//! HTTP client for the upstream update service.

use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Bytes, http::StatusCode};
use reqwest::Client;
use tracing::debug;

use common::{AppError, AppResult, UpstreamConfig};

#[cfg(test)]
use mockall::automock;

/// Raw reply from the upstream service.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outbound call capability used by the update handler.
///
/// Implementations issue a single GET with no extra headers or body and
/// report transport problems as `AppError::Transport`. Any HTTP status,
/// success or not, is returned as `Ok`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn get(&self, url: &str) -> AppResult<UpstreamResponse>;
}

/// `reqwest` implementation sharing one connection pool.
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    client: Client,
}

impl HttpUpstreamClient {
    /// Build a client with the configured timeouts.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        Self::with_timeouts(config.timeout(), config.connect_timeout())
    }

    pub fn with_timeouts(timeout: Duration, connect_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn get(&self, url: &str) -> AppResult<UpstreamResponse> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        debug!("Upstream replied {} ({} bytes)", status, body.len());
        Ok(UpstreamResponse { status, body })
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::transport(format!("upstream timed out: {}", err))
    } else if err.is_connect() {
        AppError::transport(format!("cannot connect to upstream: {}", err))
    } else {
        AppError::transport(err.to_string())
    }
}

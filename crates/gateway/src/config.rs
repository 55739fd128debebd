//! Gateway configuration.

use std::env;
use std::str::FromStr;

use common::{AppError, AppResult, ServiceConfig, UpstreamConfig};
use domain::{
    SharedSecret, DEFAULT_SERVER_ENDPOINT, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECONDS,
    DEFAULT_UPSTREAM_TIMEOUT_SECONDS, UPDATE_SYSTEM_PATH,
};
use url::Url;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// Upstream update service
    pub upstream: UpstreamConfig,
    /// Shared secret expected in update requests
    pub password: SharedSecret,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("SERVER_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_SERVER_ENDPOINT.to_string());
        validate_endpoint(&endpoint)?;

        let timeout_seconds = parse_var(
            &lookup,
            "UPSTREAM_TIMEOUT_SECONDS",
            DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
        )?;
        let connect_timeout_seconds = parse_var(
            &lookup,
            "UPSTREAM_CONNECT_TIMEOUT_SECONDS",
            DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECONDS,
        )?;
        if timeout_seconds == 0 || connect_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "Upstream timeouts must be greater than 0",
            ));
        }

        let password = lookup("UPDATE_PASSWORD")
            .ok_or_else(|| AppError::configuration("UPDATE_PASSWORD must be set"))?;
        let password = SharedSecret::new(password)
            .map_err(|_| AppError::configuration("UPDATE_PASSWORD must not be empty"))?;

        let defaults = ServiceConfig::default();
        let service = ServiceConfig {
            host: lookup("GATEWAY_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "GATEWAY_PORT", defaults.port)?,
            service_name: defaults.service_name,
        };

        Ok(Self {
            service,
            upstream: UpstreamConfig {
                endpoint,
                timeout_seconds,
                connect_timeout_seconds,
            },
            password,
        })
    }

    /// Full URL of the upstream update endpoint.
    pub fn update_system_url(&self) -> String {
        self.upstream.url_for(UPDATE_SYSTEM_PATH)
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}

fn validate_endpoint(endpoint: &str) -> AppResult<()> {
    let url = Url::parse(endpoint).map_err(|e| {
        AppError::configuration(format!("SERVER_ENDPOINT is not a valid URL ({}): {}", e, endpoint))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::configuration(format!(
            "SERVER_ENDPOINT must use http or https, got {}",
            scheme
        ))),
    }
}

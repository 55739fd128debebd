//! Clients for calling the upstream update service.

mod upstream_client;

pub use upstream_client::{HttpUpstreamClient, UpstreamClient, UpstreamResponse};

#[cfg(test)]
pub use upstream_client::MockUpstreamClient;

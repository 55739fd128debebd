//! Update-System Gateway Library
//!
//! This crate provides the HTTP endpoint that checks a shared secret and
//! forwards update requests to the upstream update service.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use common::{AppError, AppResult};

use crate::clients::HttpUpstreamClient;
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration until Ctrl-C.
pub async fn run_server(config: GatewayConfig) -> AppResult<()> {
    // Shared connection pool for every upstream call
    let upstream = Arc::new(HttpUpstreamClient::new(&config.upstream)?);

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port)
        .parse()
        .map_err(|e| AppError::configuration(format!("Invalid bind address: {}", e)))?;

    info!("Forwarding update requests to {}", config.update_system_url());

    let state = AppState::new(upstream, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("Gateway listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

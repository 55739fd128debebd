//! Unified error handling for the gateway.
//!
//! Provides a single error type that converts into an axum HTTP response.
//! Locally generated errors render as `{ "message": "..." }`; upstream
//! failures are passed through with the upstream's status and body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{
    DomainError, MessageResponse, INVALID_PASSWORD_MESSAGE, UPSTREAM_INVALID_RESPONSE_MESSAGE,
    UPSTREAM_UNREACHABLE_MESSAGE,
};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid password")]
    InvalidPassword,

    // Request errors
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    // Upstream errors
    #[error("Upstream responded with {status}")]
    Upstream {
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("Upstream transport error: {0}")]
    Transport(String),

    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),

    // Startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::Transport(_) | AppError::InvalidUpstreamResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidPassword => INVALID_PASSWORD_MESSAGE.to_string(),
            AppError::MalformedRequest(msg) => msg.clone(),

            AppError::Transport(msg) => {
                tracing::error!("Upstream transport error: {}", msg);
                UPSTREAM_UNREACHABLE_MESSAGE.to_string()
            }
            AppError::InvalidUpstreamResponse(msg) => {
                tracing::error!("Invalid upstream response: {}", msg);
                UPSTREAM_INVALID_RESPONSE_MESSAGE.to_string()
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Upstream { status, body } => (status, Json(body)).into_response(),
            other => {
                let status = other.status();
                let body = MessageResponse::new(other.user_message());
                (status, Json(body)).into_response()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => AppError::InvalidPassword,
            DomainError::Validation(msg) => AppError::MalformedRequest(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedRequest(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        AppError::Transport(msg.into())
    }

    pub fn invalid_upstream(msg: impl Into<String>) -> Self {
        AppError::InvalidUpstreamResponse(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

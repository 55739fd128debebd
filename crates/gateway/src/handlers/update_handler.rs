//! Update-system proxy handler.

use std::borrow::Cow;

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use common::{AppError, AppResult};
use domain::{MessageResponse, MAX_PASSWORD_LENGTH, UPGRADE_FAILED_MESSAGE};

use crate::clients::UpstreamResponse;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Update trigger request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRequest {
    /// Shared secret guarding the update endpoint
    #[validate(custom(function = "validate_password_length"))]
    #[schema(example = "correct-horse-battery-staple")]
    pub password: String,
}

/// Bound the password by its UTF-8 byte length, not its character count.
fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_LENGTH {
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::from("Password is too long"));
        return Err(error);
    }
    Ok(())
}

/// Create update routes
pub fn update_routes() -> Router<AppState> {
    Router::new()
        .route("/api/update-system", post(update_system))
        .route("/api/update-system/", post(update_system))
}

/// Trigger a system update on the upstream service
#[utoipa::path(
    post,
    path = "/api/update-system",
    tag = "System",
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Upstream accepted the update; body is the upstream JSON"),
        (status = 400, description = "Malformed request body", body = MessageResponse),
        (status = 401, description = "Invalid password", body = MessageResponse),
        (status = 502, description = "Upstream unreachable or replied with invalid JSON", body = MessageResponse),
        (status = "default", description = "Upstream failure status and body, passed through")
    )
)]
pub async fn update_system(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateRequest>,
) -> AppResult<Json<Value>> {
    if let Err(err) = state.config.password.verify(&payload.password) {
        warn!("Rejected update-system request: invalid password");
        return Err(err.into());
    }

    let url = state.config.update_system_url();
    info!("Forwarding update-system request to {}", url);

    let upstream = state.upstream.get(&url).await?;
    relay(upstream).map(Json)
}

/// Turn the upstream reply into the caller's response body.
///
/// Any 2xx becomes a 200 carrying the upstream JSON. Failures keep the
/// upstream status; a failure body that is not JSON is replaced by a
/// generic message.
fn relay(upstream: UpstreamResponse) -> AppResult<Value> {
    let UpstreamResponse { status, body } = upstream;
    let parsed = serde_json::from_slice::<Value>(&body);

    if status.is_success() {
        return parsed.map_err(|e| {
            AppError::invalid_upstream(format!("{} reply is not JSON: {}", status, e))
        });
    }

    warn!("Upstream rejected update-system request with {}", status);
    let body = parsed.unwrap_or_else(|_| json!({ "message": UPGRADE_FAILED_MESSAGE }));
    Err(AppError::Upstream { status, body })
}

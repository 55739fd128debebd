//! Message body shared by every locally generated response.

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    /// Human readable reason
    #[cfg_attr(feature = "openapi", schema(example = "Invalid password"))]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

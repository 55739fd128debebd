//! Domain-level constants.
//!
//! These constants define the proxy's wire contract and validation limits.

// =============================================================================
// Upstream
// =============================================================================

/// Path of the update endpoint on the upstream system, appended to the base URL
pub const UPDATE_SYSTEM_PATH: &str = "/api/update-system/";

/// Default upstream base URL when `SERVER_ENDPOINT` is not set
pub const DEFAULT_SERVER_ENDPOINT: &str = "http://localhost:6767";

/// Default whole-request timeout for the upstream call
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 30;

/// Default connect timeout for the upstream call
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECONDS: u64 = 10;

// =============================================================================
// Messages
// =============================================================================

/// Body message returned when the shared secret does not match
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password";

/// Fallback message when a failing upstream does not return JSON
pub const UPGRADE_FAILED_MESSAGE: &str = "Failed to initiate system upgrade";

/// Message returned when the upstream cannot be reached
pub const UPSTREAM_UNREACHABLE_MESSAGE: &str = "Update service is unreachable";

/// Message returned when a successful upstream reply is not JSON
pub const UPSTREAM_INVALID_RESPONSE_MESSAGE: &str = "Upstream returned an invalid response";

// =============================================================================
// Validation
// =============================================================================

/// Upper bound on a submitted password, in bytes
pub const MAX_PASSWORD_LENGTH: usize = 1024;

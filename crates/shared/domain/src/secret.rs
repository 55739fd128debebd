//! Shared secret value object - the password guarding the update endpoint.
//!
//! The secret is supplied by configuration at process start and compared
//! against submitted passwords in constant time.

use subtle::ConstantTimeEq;

use crate::error::{DomainError, DomainResult};

/// Shared secret known to both the caller and the gateway.
///
/// Matching is exact: case-sensitive, no trimming, no normalization.
#[derive(Clone)]
pub struct SharedSecret {
    value: String,
}

// Never expose the secret in debug output
impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl SharedSecret {
    /// Create a shared secret.
    ///
    /// # Errors
    /// Returns a validation error if the secret is empty.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("Shared secret must not be empty"));
        }
        Ok(Self { value })
    }

    /// Check a submitted password against the secret.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.value.as_bytes();
        let candidate = candidate.as_bytes();

        // Pad both sides to the longer length with different fill bytes so
        // the content comparison always walks the same number of bytes.
        let max_len = expected.len().max(candidate.len());
        let mut expected_padded = vec![0x00u8; max_len];
        let mut candidate_padded = vec![0xFFu8; max_len];
        expected_padded[..expected.len()].copy_from_slice(expected);
        candidate_padded[..candidate.len()].copy_from_slice(candidate);

        let lengths_equal = expected.len().ct_eq(&candidate.len());
        let contents_equal = expected_padded.ct_eq(&candidate_padded);

        (lengths_equal & contents_equal).into()
    }

    /// Verify a submitted password, failing with `InvalidCredentials`.
    pub fn verify(&self, candidate: &str) -> DomainResult<()> {
        if self.matches(candidate) {
            Ok(())
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let secret = SharedSecret::new("hunter2").unwrap();
        assert!(secret.matches("hunter2"));
        assert!(secret.verify("hunter2").is_ok());
    }

    #[test]
    fn test_case_sensitive() {
        let secret = SharedSecret::new("Secret").unwrap();
        assert!(!secret.matches("secret"));
        assert!(!secret.matches("SECRET"));
    }

    #[test]
    fn test_no_trimming() {
        let secret = SharedSecret::new("secret").unwrap();
        assert!(!secret.matches(" secret"));
        assert!(!secret.matches("secret "));
        assert!(!secret.matches("secret\n"));
    }

    #[test]
    fn test_prefix_and_extension_rejected() {
        let secret = SharedSecret::new("secret").unwrap();
        assert!(!secret.matches("secre"));
        assert!(!secret.matches("secrets"));
    }

    #[test]
    fn test_empty_candidate_rejected() {
        let secret = SharedSecret::new("secret").unwrap();
        assert!(!secret.matches(""));
        assert_eq!(secret.verify(""), Err(DomainError::InvalidCredentials));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(SharedSecret::new("").is_err());
    }

    #[test]
    fn test_debug_redacts_value() {
        let secret = SharedSecret::new("top-secret").unwrap();
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}

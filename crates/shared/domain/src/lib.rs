//! Domain layer - Core value objects for the update-system gateway.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! It knows nothing about HTTP, the upstream client, or configuration sources.

pub mod constants;
pub mod error;
pub mod message;
pub mod secret;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use message::MessageResponse;
pub use secret::SharedSecret;

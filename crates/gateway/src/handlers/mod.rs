//! HTTP request handlers.

pub mod health_handler;
pub mod update_handler;

pub use health_handler::health_routes;
pub use update_handler::update_routes;

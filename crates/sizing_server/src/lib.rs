//! REST API server for the trade risk manager
//!
//! Exposes the sizing engine over HTTP. Every endpoint is stateless: a plan
//! request carries the whole input record and receives the derived plan.

pub mod config;
pub mod routes;
pub mod server;

// Re-export the engine for integration tests
pub use sizing_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

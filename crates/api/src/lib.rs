//! REST API server and endpoints.
//!
//! This crate exposes the Monte Carlo wheel simulator over HTTP:
//! - Health check
//! - Accepted parameter ranges and cadence presets
//! - Simulation runs with clamped or strictly validated inputs

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request/response models.
pub mod models;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use state::AppState;

//! HTTP server layer
//!
//! Axum server with:
//! - CORS (all origins by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON or plain-text error responses, per route

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};

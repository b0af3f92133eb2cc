//! HTTP server layer
//!
//! Axum server with:
//! - Product CRUD routes
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use server::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;

//! prodctl-server: HTTP API over a single product table
//!
//! Routes CRUD requests to handlers that validate path, query, and body
//! input, call the data-access layer, and answer with JSON.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, MemoryProductStore, PgProductStore, ProductStore, StoreError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Product, ProductPayload};

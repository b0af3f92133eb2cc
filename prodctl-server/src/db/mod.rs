//! Database layer - connection pool, schema, and product stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Handlers depend on the `ProductStore` trait, not on PgPool
//! - Single statements only, no multi-step transactions

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryProductStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::PgProductStore;
pub use schema::ensure_schema;
pub use store::{ProductStore, StoreError};

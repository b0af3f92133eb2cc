//! Repository implementations for database access
//!
//! Each repository:
//! - Uses parameterized queries only
//! - Relies on DB constraints rather than check-then-write

pub mod products;

pub use products::PgProductStore;

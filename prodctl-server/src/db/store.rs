//! Storage trait for product records
//!
//! Handlers only see `dyn ProductStore`, so the PostgreSQL repository can be
//! swapped for the in-memory store in tests.

use async_trait::async_trait;

use crate::models::{PageWindow, Product, ProductDraft};

/// Data-access error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver-level failure; its message is passed through unchanged.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// No row matched a single-item lookup.
    #[error("product {id} not found")]
    NotFound { id: i64 },
}

/// The five product operations.
///
/// `update` and `delete` don't report missing rows: zero affected rows is
/// success.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Look up a single product by id.
    async fn fetch_one(&self, id: i64) -> Result<Product, StoreError>;

    /// Insert a product and return it with its generated id.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError>;

    /// Overwrite name and price of the row matching `id`.
    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<(), StoreError>;

    /// Remove the row matching `id`.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Up to `window.limit()` rows in id order, skipping `window.offset()`.
    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Product>, StoreError>;
}

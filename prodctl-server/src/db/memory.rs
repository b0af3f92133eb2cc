//! In-memory product store
//!
//! Same semantics as the PostgreSQL repository (serial ids, id-ordered
//! paging, silent update/delete of missing rows). Used to drive the HTTP
//! layer in tests without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{ProductStore, StoreError};
use crate::models::{PageWindow, Product, ProductDraft};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
}

/// Product store backed by a `BTreeMap`
#[derive(Debug)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
    closed: AtomicBool,
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            closed: AtomicBool::new(false),
        }
    }
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call fail like a closed connection pool.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn check_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::SeqCst) {
            Err(StoreError::Sqlx(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn fetch_one(&self, id: i64) -> Result<Product, StoreError> {
        self.check_open()?;
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        self.check_open()?;
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let product = draft.clone().with_id(id);
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<(), StoreError> {
        self.check_open()?;
        if let Some(row) = self.table.write().await.rows.get_mut(&id) {
            row.name = draft.name.clone();
            row.price = draft.price;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.check_open()?;
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Product>, StoreError> {
        self.check_open()?;
        let skip = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(window.limit()).unwrap_or(0);

        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }
}

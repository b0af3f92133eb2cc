//! Product repository
//!
//! `price` is `NUMERIC(10,2)` in the table and `f64` in Rust, so every query
//! casts at the boundary: `$n::numeric` on the way in, `price::float8` on the
//! way out. `id` is a `SERIAL` (int4) column read back as `int8` so the
//! whole i64 path-id range can be looked up.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{ProductStore, StoreError};
use crate::models::{PageWindow, Product, ProductDraft};

/// PostgreSQL-backed product store
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn fetch_one(&self, id: i64) -> Result<Product, StoreError> {
        tracing::debug!(id, "fetching product");

        sqlx::query_as::<_, Product>(
            "SELECT id::int8 AS id, name, price::float8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2::numeric)
            RETURNING id::int8 AS id, name, price::float8 AS price
            "#,
        )
        .bind(&draft.name)
        .bind(draft.price)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = product.id, "inserted product");
        Ok(product)
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE products SET name = $1, price = $2::numeric WHERE id = $3")
            .bind(&draft.name)
            .bind(draft.price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "updated product");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "deleted product");
        Ok(())
    }

    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id::int8 AS id, name, price::float8 AS price
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, pool::test_pool};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p prodctl-server -- --ignored

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            price,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn product_lifecycle() {
        let pool = test_pool().await;
        ensure_schema(&pool).await.expect("schema failed");
        sqlx::query("TRUNCATE products RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("truncate failed");

        let store = PgProductStore::new(pool);

        // Empty table pages to an empty vec
        let page = store.fetch_page(PageWindow::default()).await.unwrap();
        assert!(page.is_empty());

        // Missing row is NotFound, not a driver error
        let err = store.fetch_one(11).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 11 }));

        // Round trip
        let created = store.insert(&draft("test product", 11.22)).await.unwrap();
        assert!(created.id > 0);
        let fetched = store.fetch_one(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.price, 11.22);

        // Update in place
        store.update(created.id, &draft("updated", 5.0)).await.unwrap();
        let fetched = store.fetch_one(created.id).await.unwrap();
        assert_eq!(fetched.name, "updated");
        assert_eq!(fetched.price, 5.0);

        // Missing ids are silently accepted
        store.update(9999, &draft("ghost", 1.0)).await.unwrap();
        store.delete(9999).await.unwrap();

        // Ids past the int4 column range miss instead of erroring
        let err = store.fetch_one(99_999_999_999).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 99_999_999_999 }));
        store.delete(99_999_999_999).await.unwrap();

        // Paging
        for i in 0..12 {
            store.insert(&draft(&format!("p{i}"), i as f64)).await.unwrap();
        }
        let page = store.fetch_page(PageWindow::new(0, 10)).await.unwrap();
        assert_eq!(page.len(), 10);
        let page = store.fetch_page(PageWindow::new(10, 10)).await.unwrap();
        assert_eq!(page.len(), 3);
        assert!(page.windows(2).all(|w| w[0].id < w[1].id));

        store.delete(created.id).await.unwrap();
        let err = store.fetch_one(created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}

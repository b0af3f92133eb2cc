//! Products table bootstrap

use sqlx::PgPool;

/// Create the `products` table if it isn't there yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring products table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price NUMERIC(10,2) NOT NULL DEFAULT 0.00
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

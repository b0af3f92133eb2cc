//! PostgreSQL pool construction
//!
//! Callers build `PgConnectOptions` themselves (from a URL or from discrete
//! user/password/host/name settings), so credentials never need URL escaping.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Connection cap used when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool of at most `max_connections` connections.
///
/// Connects eagerly, so an unreachable server fails here rather than on the
/// first request.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "database pool ready");
    Ok(pool)
}

/// Pool for `--ignored` tests, pointed at `DATABASE_URL`.
#[cfg(test)]
pub(crate) async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let options: PgConnectOptions = url.parse().expect("DATABASE_URL should parse");
    create_pool(options, DEFAULT_MAX_CONNECTIONS)
        .await
        .expect("pool creation failed")
}

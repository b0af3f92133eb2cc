//! HTTP server command for the products API
//!
//! Connects to PostgreSQL, makes sure the products table exists, and serves
//! the CRUD routes until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use prodctl_server::db::{create_pool, ensure_schema, PgProductStore, DEFAULT_MAX_CONNECTIONS};
use prodctl_server::http::{run_server, AppState, ServerConfig};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PRODCTL_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Maximum database connections in the pool
    #[arg(long, env = "PRODCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let options = args.database.connect_options()?;

    tracing::info!(
        database = %args.database.describe(),
        max_connections = args.max_connections,
        "Connecting to database"
    );

    let pool = create_pool(options, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to prepare products table")?;

    let state = AppState::new(PgProductStore::new(pool));
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}

//! Database connection settings
//!
//! Resolution order:
//! 1. `--database-url` / `DATABASE_URL`
//! 2. `APP_DB_USERNAME`, `APP_DB_PASSWORD`, `APP_DB_NAME` (+ `APP_DB_HOST`),
//!    connected without TLS
//!
//! Values from a `.env` file in the working directory are picked up too,
//! since `main` loads it before parsing arguments.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Args;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Where the products database lives
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (takes precedence over the APP_DB_* settings)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database user
    #[arg(long, env = "APP_DB_USERNAME")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "APP_DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "APP_DB_NAME")]
    pub db_name: Option<String>,

    /// Database host
    #[arg(long, env = "APP_DB_HOST", default_value = "localhost")]
    pub db_host: String,
}

impl DatabaseArgs {
    /// Build sqlx connect options from whichever settings are present.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.database_url {
            return PgConnectOptions::from_str(url).context("invalid database URL");
        }

        let (Some(user), Some(name)) = (&self.db_user, &self.db_name) else {
            bail!("no database configured: set DATABASE_URL or APP_DB_USERNAME and APP_DB_NAME");
        };

        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .username(user)
            .database(name)
            .ssl_mode(PgSslMode::Disable);

        if let Some(password) = &self.db_password {
            options = options.password(password);
        }

        Ok(options)
    }

    /// Short human-readable target for logs (never includes the password).
    pub fn describe(&self) -> String {
        match (&self.database_url, &self.db_name) {
            (Some(_), _) => "DATABASE_URL".to_string(),
            (None, Some(name)) => format!("{}/{}", self.db_host, name),
            (None, None) => "<unset>".to_string(),
        }
    }
}

//! Tracing setup for the prodctl CLI
//!
//! Usage:
//!   prodctl --debug serve              # Debug logging to console
//!   RUST_LOG=prodctl_server=debug prodctl serve
//!
//! Environment variables:
//!   RUST_LOG                           # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
}

impl TracingConfig {
    fn default_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Initialize console tracing. RUST_LOG wins over `--debug`.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_picks_filter() {
        assert_eq!(TracingConfig { debug: true }.default_filter(), "debug");
        assert_eq!(TracingConfig::default().default_filter(), "info");
    }
}

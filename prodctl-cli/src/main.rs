//! prodctl CLI - runs the products HTTP API
//!
//! Configuration comes from flags, environment variables, and a `.env` file
//! in the working directory (loaded first, so it feeds clap's `env` lookups).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "prodctl", version, about = "Product CRUD API server")]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::try_parse_from([
            "prodctl",
            "serve",
            "--debug",
            "--database-url",
            "postgres://localhost/p",
        ])
        .unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Serve(_)));
    }
}

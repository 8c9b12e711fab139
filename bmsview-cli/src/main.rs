//! bmsview CLI - read-only JSON and HTML views of the `bms` table
//!
//! - `serve`: HTTP server with `/api/bms` (JSON) and `/api/db-viewer` (HTML)
//! - `fetch`: run the query once and print JSON or HTML
//! - `config`: inspect the resolved configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "bmsview",
    author,
    version,
    about = "Read-only HTTP facade over the bms table",
    long_about = "Serve the rows of the bms table as a JSON array or an HTML table. \
                  Every request runs a fresh SELECT against the configured database."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.bmsview/config.toml)
    #[arg(long, global = true, env = "BMSVIEW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Fetch the table once and print it as JSON or HTML
    Fetch(commands::fetch::FetchArgs),
    /// Show resolved configuration or the config file path
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let config_path = cli
        .config
        .unwrap_or_else(bmsview_core::BmsviewConfig::config_path);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, &config_path).await,
        Commands::Fetch(args) => commands::fetch::run_fetch(args, &config_path).await,
        Commands::Config(args) => commands::config::run_config(args, &config_path),
    };

    tracing_setup::shutdown_otel();
    result
}

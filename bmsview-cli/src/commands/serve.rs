//! HTTP server command
//!
//! Resolves configuration and runs the bmsview server until shutdown.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use bmsview_server::http::server::DEFAULT_PORT;
use bmsview_server::{run_server, PgBmsSource, ServerConfig};
use clap::Parser;

use super::{resolve_config, DbArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5001, or [server].bind from config)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Only allow localhost origins (default: any origin)
    #[arg(long)]
    pub cors_localhost: bool,

    /// Allow any origin, overriding [server].cors_permissive = false in config
    #[arg(long, conflicts_with = "cors_localhost")]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config_path: &Path) -> Result<()> {
    let config = resolve_config(config_path, args.db)?;

    let bind_addr = match (args.bind, config.server.bind.as_deref()) {
        (Some(addr), _) => addr,
        (None, Some(addr)) => addr
            .parse()
            .with_context(|| format!("Invalid [server].bind address in config: {addr:?}"))?,
        (None, None) => SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
    };

    let cors_permissive =
        resolve_cors(args.cors_localhost, args.cors_permissive, config.server.cors_permissive);

    tracing::info!(
        db_host = %config.database.host,
        db_port = config.database.port,
        database = %config.database.database,
        "Starting bmsview server on {}",
        bind_addr
    );

    let source = Arc::new(PgBmsSource::new(config.database));
    let server_config = ServerConfig {
        bind_addr,
        cors_permissive,
    };

    run_server(source, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

/// Flags win over `[server].cors_permissive`; any origin when nothing is set.
fn resolve_cors(localhost_flag: bool, permissive_flag: bool, from_config: Option<bool>) -> bool {
    if localhost_flag {
        false
    } else if permissive_flag {
        true
    } else {
        from_config.unwrap_or(true)
    }
}

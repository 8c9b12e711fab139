//! One-shot fetch: run the query once and print the result

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bmsview_core::{to_html, to_json, ResultSet};
use bmsview_server::{BmsSource, PgBmsSource};
use clap::{Parser, ValueEnum};

use super::{resolve_config, DbArgs};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_fetch(args: FetchArgs, config_path: &Path) -> Result<()> {
    let config = resolve_config(config_path, args.db)?;
    let source = PgBmsSource::new(config.database);

    let set = source
        .fetch()
        .await
        .context("Failed to fetch bms table")?;
    tracing::info!(rows = set.len(), "fetched bms");

    let rendered = render(&set, args.format, args.pretty)?;

    match args.output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn render(set: &ResultSet, format: OutputFormat, pretty: bool) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&to_json(set))?,
        OutputFormat::Json => serde_json::to_string(&to_json(set))?,
        OutputFormat::Html => to_html(set),
    };
    out.push('\n');
    Ok(out)
}

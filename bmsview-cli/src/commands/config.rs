use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::{resolve_config, DbArgs};

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration as TOML (password masked)
    Show,
    /// Show config file path
    Path,
}

pub fn run_config(args: ConfigArgs, config_path: &Path) -> Result<()> {
    match args.command {
        ConfigCommands::Show => run_show(config_path),
        ConfigCommands::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn run_show(config_path: &Path) -> Result<()> {
    let mut config = resolve_config(config_path, DbArgs::default())?;
    config.database = config.database.redacted();

    let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("# {}", config_path.display());
    print!("{rendered}");
    Ok(())
}

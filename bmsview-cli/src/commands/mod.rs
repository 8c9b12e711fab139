//! Subcommand implementations

pub mod config;
pub mod fetch;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use bmsview_core::BmsviewConfig;
use clap::Args;

/// Database flags shared by `serve` and `fetch`; they override file and env.
#[derive(Args, Debug, Default)]
pub struct DbArgs {
    /// Database host
    #[arg(long)]
    pub db_host: Option<String>,

    /// Database port
    #[arg(long)]
    pub db_port: Option<u16>,

    /// Database name
    #[arg(long)]
    pub db_name: Option<String>,

    /// Database user
    #[arg(long)]
    pub db_user: Option<String>,

    /// Schema to look up the bms table in (sets search_path)
    #[arg(long)]
    pub db_schema: Option<String>,

    /// Seconds allowed for opening a connection
    #[arg(long)]
    pub connect_timeout: Option<u64>,

    /// Seconds allowed for the query
    #[arg(long)]
    pub query_timeout: Option<u64>,
}

impl DbArgs {
    fn apply(self, config: &mut BmsviewConfig) {
        let db = &mut config.database;
        if let Some(host) = self.db_host {
            db.host = host;
        }
        if let Some(port) = self.db_port {
            db.port = port;
        }
        if let Some(name) = self.db_name {
            db.database = name;
        }
        if let Some(user) = self.db_user {
            db.user = user;
        }
        if let Some(schema) = self.db_schema {
            db.schema = Some(schema);
        }
        if let Some(secs) = self.connect_timeout {
            db.connect_timeout_secs = secs;
        }
        if let Some(secs) = self.query_timeout {
            db.query_timeout_secs = secs;
        }
    }
}

/// File, then `BMS_DB_*` environment, then flags.
pub fn resolve_config(config_path: &Path, overrides: DbArgs) -> Result<BmsviewConfig> {
    let mut config = BmsviewConfig::load_from(config_path)?;
    config
        .database
        .apply_env()
        .context("Invalid BMS_DB_* environment variable")?;
    overrides.apply(&mut config);
    config
        .database
        .validate()
        .context("Invalid database configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nhost = \"from-file\"\nport = 6000").unwrap();

        let mut config = BmsviewConfig::load_from(file.path()).unwrap();
        DbArgs {
            db_host: Some("from-flag".into()),
            query_timeout: Some(7),
            ..DbArgs::default()
        }
        .apply(&mut config);

        assert_eq!(config.database.host, "from-flag");
        assert_eq!(config.database.port, 6000);
        assert_eq!(config.database.query_timeout_secs, 7);
    }

    #[test]
    fn schema_flag_is_applied() {
        let mut config = BmsviewConfig::default();
        DbArgs {
            db_schema: Some("plant".into()),
            ..DbArgs::default()
        }
        .apply(&mut config);

        assert_eq!(config.database.schema.as_deref(), Some("plant"));
    }

    #[test]
    fn zero_query_timeout_flag_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_config(
            &dir.path().join("config.toml"),
            DbArgs {
                query_timeout: Some(0),
                ..DbArgs::default()
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("Invalid database configuration"));
        assert!(format!("{err:#}").contains("query timeout must be at least 1 second"));
    }
}

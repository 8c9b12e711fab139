use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Connection settings for the database holding the `bms` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Sets `search_path` for the connection, so `bms` resolves in this schema
    pub schema: Option<String>,
    pub connect_timeout_secs: u64,
    pub query_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            schema: None,
            connect_timeout_secs: 5,
            query_timeout_secs: 30,
        }
    }
}

impl DbConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Apply `BMS_DB_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Apply `BMS_DB_*` overrides using `lookup` to resolve variables
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("BMS_DB_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("BMS_DB_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("BMS_DB_PORT is not a valid port: {port:?}"))?;
        }
        if let Some(database) = lookup("BMS_DB_NAME") {
            self.database = database;
        }
        if let Some(user) = lookup("BMS_DB_USER") {
            self.user = user;
        }
        if let Some(password) = lookup("BMS_DB_PASSWORD") {
            self.password = password;
        }
        if let Some(schema) = lookup("BMS_DB_SCHEMA") {
            self.schema = Some(schema);
        }
        if let Some(secs) = lookup("BMS_DB_CONNECT_TIMEOUT") {
            self.connect_timeout_secs = secs
                .parse()
                .with_context(|| format!("BMS_DB_CONNECT_TIMEOUT must be whole seconds: {secs:?}"))?;
        }
        if let Some(secs) = lookup("BMS_DB_QUERY_TIMEOUT") {
            self.query_timeout_secs = secs
                .parse()
                .with_context(|| format!("BMS_DB_QUERY_TIMEOUT must be whole seconds: {secs:?}"))?;
        }
        Ok(())
    }

    /// Reject settings that would make every fetch fail before it starts
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 {
            bail!("connect timeout must be at least 1 second");
        }
        if self.query_timeout_secs == 0 {
            bail!("query timeout must be at least 1 second");
        }
        Ok(())
    }

    /// Copy safe to print: password replaced with asterisks
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.password.is_empty() {
            copy.password = "********".to_string();
        }
        copy
    }
}

/// `[server]` table of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Listen address, e.g. "127.0.0.1:5001"
    pub bind: Option<String>,
    pub cors_permissive: Option<bool>,
}

/// Contents of `~/.bmsview/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmsviewConfig {
    pub database: DbConfig,
    pub server: ServerSection,
}

impl BmsviewConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Config file path: `$BMSVIEW_CONFIG`, else ~/.bmsview/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("BMSVIEW_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bmsview/config.toml")
    }
}

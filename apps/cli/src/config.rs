//! CLI configuration.
//!
//! Priority: command-line flag, then environment variable, then default.

use clap::Parser;
use std::env;
use std::path::PathBuf;

use bistro_db::DbConfig;

/// Database file used when neither `--db` nor `BISTRO_DB_PATH` is given.
pub const DEFAULT_DB_PATH: &str = "restaurant_ordering.db";

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "bistro", version, about = "Interactive restaurant ordering shell")]
pub struct Cli {
    /// SQLite database file (created if missing)
    #[arg(long, env = "BISTRO_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Connection pool size (default: 1)
    pub max_connections: u32,
}

impl AppConfig {
    /// Load configuration from parsed flags and environment variables.
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        Self::from_sources(cli, |key| env::var(key).ok())
    }

    fn from_sources(
        cli: Cli,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let max_connections: u32 = lookup("BISTRO_MAX_CONNECTIONS")
            .unwrap_or_else(|| "1".to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BISTRO_MAX_CONNECTIONS".to_string()))?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "BISTRO_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(AppConfig {
            database_path: cli.db,
            max_connections,
        })
    }

    /// Database settings for [`bistro_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

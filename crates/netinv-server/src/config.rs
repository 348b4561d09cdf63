//! Layered configuration
//!
//! Built-in defaults, then an optional TOML file, then `NETINV__`-prefixed
//! environment variables (`NETINV__SERVER__BIND`, `NETINV__DATABASE__PATH`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use netinv_core::logging_facility::Profile;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "netinv.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub busy_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    pub profile: Profile,
}

impl AppConfig {
    /// Load configuration
    ///
    /// An explicit `file` must exist; the default `netinv.toml` is optional.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or a value has
    /// the wrong type.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        Config::builder()
            .set_default("server.bind", "127.0.0.1:8000")?
            .set_default("database.path", "inventory.db")?
            .set_default(
                "database.busy_timeout_ms",
                netinv_store::db::DEFAULT_BUSY_TIMEOUT_MS,
            )?
            .set_default("logging.profile", "development")?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix("NETINV")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

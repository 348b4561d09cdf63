pub mod list;
pub mod seed;
pub mod serve;

use anyhow::Context;
use clap::Args;
use netinv_server::AppConfig;
use netinv_store::Database;
use std::path::PathBuf;

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// SQLite database file (overrides `database.path`)
    #[arg(long, env = "NETINV_DB")]
    pub db: Option<PathBuf>,

    /// TOML config file (default: ./netinv.toml if present)
    #[arg(long, env = "NETINV_CONFIG")]
    pub config: Option<PathBuf>,
}

impl StoreArgs {
    /// Load configuration and apply flag overrides
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref()).context("loading configuration")?;
        if let Some(db) = &self.db {
            config.database.path = db.clone();
        }
        netinv_core::logging_facility::init(config.logging.profile);
        Ok(config)
    }
}

pub fn open_database(config: &AppConfig) -> anyhow::Result<Database> {
    Database::open(&config.database.path, config.database.busy_timeout_ms)
        .with_context(|| format!("opening database {}", config.database.path.display()))
}

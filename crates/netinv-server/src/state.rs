//! Shared application state
//!
//! Holds only the database handle. Each operation opens its own connection
//! on the blocking pool and drops it when the closure returns.

use netinv_core::errors::Result;
use netinv_core::InventoryError;
use netinv_engine::commands::{
    apply_inventory_command, apply_inventory_query, InventoryCommand, InventoryCommandResult,
    InventoryQuery, InventoryQueryResult,
};
use netinv_store::Database;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Run `f` with a fresh connection on the blocking pool
    pub async fn run<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = db.connect()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| InventoryError::Internal {
            message: format!("database task failed: {}", e),
        })?
    }

    pub async fn command(&self, cmd: InventoryCommand) -> Result<InventoryCommandResult> {
        self.run(move |conn| apply_inventory_command(cmd, conn)).await
    }

    pub async fn query(&self, query: InventoryQuery) -> Result<InventoryQueryResult> {
        self.run(move |conn| apply_inventory_query(query, conn)).await
    }
}

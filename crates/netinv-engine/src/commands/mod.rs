//! Command orchestration layer.
//!
//! Provides the command and query entry points that coordinate between
//! core domain logic and the persistence layer.

pub mod inventory_command;
pub mod inventory_query;

pub use inventory_command::{apply_inventory_command, InventoryCommand, InventoryCommandResult};
pub use inventory_query::{apply_inventory_query, InventoryQuery, InventoryQueryResult};

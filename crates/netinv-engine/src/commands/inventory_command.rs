//! Write commands against the inventory table.

use netinv_core::errors::Result;
use netinv_core::{
    log_op_end, log_op_error, log_op_start, InventoryPatch, InventoryRecord, NewInventoryRecord,
};
use netinv_store::errors::from_rusqlite;
use netinv_store::SqliteRepo;
use rusqlite::{Connection, TransactionBehavior};
use std::time::Instant;
use uuid::Uuid;

/// Mutating operations.
#[derive(Debug, Clone)]
pub enum InventoryCommand {
    /// Uniqueness-checked create.
    Create { record: NewInventoryRecord },
    /// Partial update; only fields present in `patch` change.
    Update { id: Uuid, patch: InventoryPatch },
    Delete { id: Uuid },
}

impl InventoryCommand {
    fn op_name(&self) -> &'static str {
        match self {
            InventoryCommand::Create { .. } => "inventory_create",
            InventoryCommand::Update { .. } => "inventory_update",
            InventoryCommand::Delete { .. } => "inventory_delete",
        }
    }
}

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommandResult {
    Created(InventoryRecord),
    Updated(InventoryRecord),
    Deleted { id: Uuid },
}

impl InventoryCommandResult {
    /// The record left in storage, if any
    pub fn into_record(self) -> Option<InventoryRecord> {
        match self {
            InventoryCommandResult::Created(r) | InventoryCommandResult::Updated(r) => Some(r),
            InventoryCommandResult::Deleted { .. } => None,
        }
    }
}

/// Apply a command inside a single transaction.
///
/// The transaction is rolled back on any error.
pub fn apply_inventory_command(
    cmd: InventoryCommand,
    conn: &mut Connection,
) -> Result<InventoryCommandResult> {
    let op = cmd.op_name();
    let start = Instant::now();
    log_op_start!(op);

    let result = execute(cmd, conn);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(InventoryCommandResult::Created(r)) | Ok(InventoryCommandResult::Updated(r)) => {
            log_op_end!(op, duration_ms = duration_ms, record_id = %r.id);
        }
        Ok(InventoryCommandResult::Deleted { id }) => {
            log_op_end!(op, duration_ms = duration_ms, record_id = %id);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }

    result
}

fn execute(cmd: InventoryCommand, conn: &mut Connection) -> Result<InventoryCommandResult> {
    // Write lock held from the uniqueness check through the insert
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(from_rusqlite)?;

    let outcome = match cmd {
        InventoryCommand::Create { record } => {
            InventoryCommandResult::Created(SqliteRepo::create(&tx, record)?)
        }
        InventoryCommand::Update { id, patch } => {
            InventoryCommandResult::Updated(SqliteRepo::update_partial(&tx, id, &patch)?)
        }
        InventoryCommand::Delete { id } => {
            SqliteRepo::delete(&tx, id)?;
            InventoryCommandResult::Deleted { id }
        }
    };

    tx.commit().map_err(from_rusqlite)?;
    Ok(outcome)
}

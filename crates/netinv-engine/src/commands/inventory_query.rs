//! Read-only queries against the inventory table.

use netinv_core::errors::Result;
use netinv_core::{log_op_end, log_op_error, log_op_start, InventoryRecord};
use netinv_store::SqliteRepo;
use rusqlite::Connection;
use std::time::Instant;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryQuery {
    List,
    Get { id: Uuid },
    /// Exact, case-sensitive match
    ByLocation { location: String },
    /// Exact, case-sensitive match
    ByMake { make: String },
    Count,
}

impl InventoryQuery {
    fn op_name(&self) -> &'static str {
        match self {
            InventoryQuery::List => "inventory_list",
            InventoryQuery::Get { .. } => "inventory_get",
            InventoryQuery::ByLocation { .. } => "inventory_by_location",
            InventoryQuery::ByMake { .. } => "inventory_by_make",
            InventoryQuery::Count => "inventory_count",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryQueryResult {
    Records(Vec<InventoryRecord>),
    /// `None` when the id does not resolve
    Record(Option<InventoryRecord>),
    Count(u64),
}

impl InventoryQueryResult {
    /// Records carried by the result; a single record becomes a one-element list
    pub fn into_records(self) -> Vec<InventoryRecord> {
        match self {
            InventoryQueryResult::Records(records) => records,
            InventoryQueryResult::Record(record) => record.into_iter().collect(),
            InventoryQueryResult::Count(_) => Vec::new(),
        }
    }

    fn len(&self) -> u64 {
        match self {
            InventoryQueryResult::Records(records) => records.len() as u64,
            InventoryQueryResult::Record(record) => u64::from(record.is_some()),
            InventoryQueryResult::Count(n) => *n,
        }
    }
}

/// Apply a read-only query.
pub fn apply_inventory_query(
    query: InventoryQuery,
    conn: &Connection,
) -> Result<InventoryQueryResult> {
    let op = query.op_name();
    let start = Instant::now();
    log_op_start!(op);

    let result = match query {
        InventoryQuery::List => SqliteRepo::list(conn).map(InventoryQueryResult::Records),
        InventoryQuery::Get { id } => SqliteRepo::get(conn, id).map(InventoryQueryResult::Record),
        InventoryQuery::ByLocation { location } => {
            SqliteRepo::list_by_location(conn, &location).map(InventoryQueryResult::Records)
        }
        InventoryQuery::ByMake { make } => {
            SqliteRepo::list_by_make(conn, &make).map(InventoryQueryResult::Records)
        }
        InventoryQuery::Count => SqliteRepo::count(conn).map(InventoryQueryResult::Count),
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(r) => {
            log_op_end!(op, duration_ms = duration_ms, result_len = r.len());
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }

    result
}

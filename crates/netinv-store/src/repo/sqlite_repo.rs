//! SQLite repository implementation
//!
//! Row operations for inventory records. Every function takes a
//! `&Connection`; a `Transaction` derefs to one, so callers decide the
//! transaction boundary.

use crate::errors::{from_rusqlite, from_write, Result};
use netinv_core::{InventoryError, InventoryPatch, InventoryRecord, NewInventoryRecord};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, name, ip_address, location, state, device_type, \
     make, model, os_version, end_of_support FROM inventory";

/// Per-field `CASE WHEN` so one static statement covers every patch shape.
/// `?1` is the id; each field then takes a presence flag and a value.
const UPDATE_PARTIAL_SQL: &str = "UPDATE inventory SET
    name = CASE WHEN ?2 THEN ?3 ELSE name END,
    ip_address = CASE WHEN ?4 THEN ?5 ELSE ip_address END,
    location = CASE WHEN ?6 THEN ?7 ELSE location END,
    state = CASE WHEN ?8 THEN ?9 ELSE state END,
    device_type = CASE WHEN ?10 THEN ?11 ELSE device_type END,
    make = CASE WHEN ?12 THEN ?13 ELSE make END,
    model = CASE WHEN ?14 THEN ?15 ELSE model END,
    os_version = CASE WHEN ?16 THEN ?17 ELSE os_version END,
    end_of_support = CASE WHEN ?18 THEN ?19 ELSE end_of_support END
    WHERE id = ?1";

/// SQLite repository for inventory records
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a record as-is
    ///
    /// A duplicate name surfaces as `NameConflict` via the UNIQUE constraint.
    pub fn insert(conn: &Connection, record: &InventoryRecord) -> Result<()> {
        conn.execute(
            "INSERT INTO inventory (id, name, ip_address, location, state, device_type,
                make, model, os_version, end_of_support)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                record.id.to_string(),
                record.name,
                record.ip_address,
                record.location,
                record.state,
                record.device_type,
                record.make,
                record.model,
                record.os_version,
                record.end_of_support,
            ],
        )
        .map_err(|e| from_write(e, record.name.as_deref()))?;

        Ok(())
    }

    /// Uniqueness-checked create
    ///
    /// Rejects a name already in use, then assigns a fresh id and inserts.
    pub fn create(conn: &Connection, new: NewInventoryRecord) -> Result<InventoryRecord> {
        if let Some(name) = new.name.as_deref() {
            if Self::exists_with_name(conn, name)? {
                return Err(InventoryError::NameConflict {
                    name: name.to_string(),
                });
            }
        }

        let record = new.into_record(Uuid::now_v7());
        Self::insert(conn, &record)?;
        Ok(record)
    }

    /// Fetch one record by id
    pub fn get(conn: &Connection, id: Uuid) -> Result<Option<InventoryRecord>> {
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            [id.to_string()],
            row_to_record,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All records in insertion order
    pub fn list(conn: &Connection) -> Result<Vec<InventoryRecord>> {
        Self::query_records(conn, &format!("{} ORDER BY rowid", SELECT_COLUMNS), None)
    }

    /// Records whose location equals `location` exactly
    pub fn list_by_location(conn: &Connection, location: &str) -> Result<Vec<InventoryRecord>> {
        Self::query_records(
            conn,
            &format!("{} WHERE location = ?1 ORDER BY rowid", SELECT_COLUMNS),
            Some(location),
        )
    }

    /// Records whose make equals `make` exactly
    pub fn list_by_make(conn: &Connection, make: &str) -> Result<Vec<InventoryRecord>> {
        Self::query_records(
            conn,
            &format!("{} WHERE make = ?1 ORDER BY rowid", SELECT_COLUMNS),
            Some(make),
        )
    }

    pub fn exists_with_name(conn: &Connection, name: &str) -> Result<bool> {
        conn.query_row("SELECT 1 FROM inventory WHERE name = ?1", [name], |_| {
            Ok(())
        })
        .optional()
        .map(|found| found.is_some())
        .map_err(from_rusqlite)
    }

    /// Apply the supplied fields of `patch` and return the updated record
    ///
    /// Unknown id is `NotFound` even when the patch is empty; an empty patch
    /// against an existing record is `NoFieldsToUpdate`.
    pub fn update_partial(
        conn: &Connection,
        id: Uuid,
        patch: &InventoryPatch,
    ) -> Result<InventoryRecord> {
        if Self::get(conn, id)?.is_none() {
            return Err(not_found(id));
        }
        if patch.is_empty() {
            return Err(InventoryError::NoFieldsToUpdate { id: id.to_string() });
        }

        let new_name = patch.name.as_present().flatten().map(String::as_str);
        conn.execute(
            UPDATE_PARTIAL_SQL,
            params![
                id.to_string(),
                patch.name.is_present(),
                patch.name.as_present().flatten(),
                patch.ip_address.is_present(),
                patch.ip_address.as_present().flatten(),
                patch.location.is_present(),
                patch.location.as_present().flatten(),
                patch.state.is_present(),
                patch.state.as_present().flatten(),
                patch.device_type.is_present(),
                patch.device_type.as_present().flatten(),
                patch.make.is_present(),
                patch.make.as_present().flatten(),
                patch.model.is_present(),
                patch.model.as_present().flatten(),
                patch.os_version.is_present(),
                patch.os_version.as_present().flatten(),
                patch.end_of_support.is_present(),
                patch.end_of_support.as_present().flatten(),
            ],
        )
        .map_err(|e| from_write(e, new_name))?;

        Self::get(conn, id)?.ok_or_else(|| not_found(id))
    }

    /// Remove a record; `NotFound` if nothing was deleted
    pub fn delete(conn: &Connection, id: Uuid) -> Result<()> {
        let changes = conn
            .execute("DELETE FROM inventory WHERE id = ?1", [id.to_string()])
            .map_err(from_rusqlite)?;

        if changes == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub fn count(conn: &Connection) -> Result<u64> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(count.max(0) as u64)
    }

    fn query_records(
        conn: &Connection,
        sql: &str,
        filter: Option<&str>,
    ) -> Result<Vec<InventoryRecord>> {
        let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
        let rows = match filter {
            Some(value) => stmt.query_map([value], row_to_record),
            None => stmt.query_map([], row_to_record),
        }
        .map_err(from_rusqlite)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)
    }
}

fn not_found(id: Uuid) -> InventoryError {
    InventoryError::NotFound { id: id.to_string() }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<InventoryRecord> {
    let id: String = row.get(0)?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

    Ok(InventoryRecord {
        id,
        name: row.get(1)?,
        ip_address: row.get(2)?,
        location: row.get(3)?,
        state: row.get(4)?,
        device_type: row.get(5)?,
        make: row.get(6)?,
        model: row.get(7)?,
        os_version: row.get(8)?,
        end_of_support: row.get(9)?,
    })
}

//! Error handling for netinv-store
//!
//! Translates rusqlite failures into `InventoryError` and provides
//! store-specific constructors.

use netinv_core::errors::InventoryError;
use rusqlite::ErrorCode;

pub use netinv_core::errors::Result;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> InventoryError {
    InventoryError::Persistence {
        message: err.to_string(),
    }
}

/// True when the error is a UNIQUE constraint violation
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Map an error from a statement that writes `name`
///
/// `inventory.name` is the only UNIQUE column besides the primary key, so a
/// unique violation here is a name conflict.
pub fn from_write(err: rusqlite::Error, name: Option<&str>) -> InventoryError {
    if is_unique_violation(&err) {
        InventoryError::NameConflict {
            name: name.unwrap_or_default().to_string(),
        }
    } else {
        from_rusqlite(err)
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> InventoryError {
    InventoryError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> InventoryError {
    InventoryError::Persistence {
        message: format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ),
    }
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> InventoryError {
    InventoryError::InvalidField {
        field: "seed".to_string(),
        reason: reason.to_string(),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> InventoryError {
    InventoryError::Io {
        message: format!("{}: {}", operation, err),
    }
}

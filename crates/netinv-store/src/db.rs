//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections, and
//! the `Database` handle that hands out one connection per operation.

use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default time a connection waits on a locked database
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection: foreign keys, WAL journal, busy timeout
pub fn configure(conn: &Connection, busy_timeout: Duration) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    // Concurrent writers are serialized by SQLite
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(from_rusqlite)?;

    conn.busy_timeout(busy_timeout).map_err(from_rusqlite)?;

    Ok(())
}

/// File-backed inventory database
///
/// Holds no connection. Each call to [`Database::connect`] opens a fresh,
/// configured connection owned by the caller and closed when dropped.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Database {
    /// Open (creating if needed) the database file and apply migrations
    pub fn open<P: AsRef<Path>>(path: P, busy_timeout_ms: u64) -> Result<Self> {
        let db = Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(busy_timeout_ms),
        };

        let mut conn = db.connect()?;
        apply_migrations(&mut conn)?;
        tracing::debug!(path = %db.path.display(), "database ready");

        Ok(db)
    }

    /// Open a new configured connection
    pub fn connect(&self) -> Result<Connection> {
        let conn = open(&self.path)?;
        configure(&conn, self.busy_timeout)?;
        Ok(conn)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! netinv-store - Persistence layer with SQLite and seed import
//!
//! Provides:
//! - Connection management and the per-operation `Database` handle
//! - SQLite schema with migrations framework
//! - `SqliteRepo` row operations over the `inventory` table
//! - Seed format v0 parser and importer

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use db::Database;
pub use errors::Result;
pub use repo::SqliteRepo;

//! Repository layer over the `inventory` table

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;

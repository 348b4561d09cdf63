//! Seed importer orchestration
//!
//! Creates every seed record through the uniqueness-checked create path
//! inside one transaction. Any failure rolls back the whole import.

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use crate::seed::{compute_seed_digest, parse_seed_file, SeedV0};
use netinv_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Outcome of a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedImportReport {
    pub created: usize,
    pub digest: String,
}

/// Parse a seed file and import it
pub fn import_seed_file(path: &Path, conn: &mut Connection) -> Result<SeedImportReport> {
    let seed = parse_seed_file(path)?;
    import_seed(&seed, conn)
}

/// Import an already-parsed seed
pub fn import_seed(seed: &SeedV0, conn: &mut Connection) -> Result<SeedImportReport> {
    let start = Instant::now();
    log_op_start!("seed_import", records = seed.inventory.len());

    match import_in_tx(seed, conn) {
        Ok(report) => {
            log_op_end!(
                "seed_import",
                duration_ms = start.elapsed().as_millis() as u64,
                result_len = report.created,
                digest = %report.digest
            );
            Ok(report)
        }
        Err(e) => {
            log_op_error!(
                "seed_import",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

fn import_in_tx(seed: &SeedV0, conn: &mut Connection) -> Result<SeedImportReport> {
    let digest = compute_seed_digest(seed)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    for record in &seed.inventory {
        SqliteRepo::create(&tx, record.clone())?;
    }
    tx.commit().map_err(from_rusqlite)?;

    Ok(SeedImportReport {
        created: seed.inventory.len(),
        digest,
    })
}

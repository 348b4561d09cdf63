//! Checksum validation for migrations
//!
//! SHA-256 of the migration SQL, recorded when applied and compared on
//! every later run.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

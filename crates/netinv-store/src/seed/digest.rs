//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility

use crate::errors::Result;
use crate::seed::format::SeedV0;
use netinv_core::InventoryError;
use sha2::{Digest, Sha256};

/// Compute a stable digest for a seed
///
/// The canonical form is the compact JSON serialization of the parsed seed,
/// so YAML and JSON sources with the same content produce the same digest.
/// Record order is significant: it is the insertion order.
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let json = serde_json::to_string(seed).map_err(InventoryError::from)?;
    Ok(hex::encode(Sha256::digest(json.as_bytes())))
}

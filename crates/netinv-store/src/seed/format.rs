//! Seed format v0
//!
//! ```yaml
//! schema_version: 0
//! inventory:
//!   - name: bigip-a.va-dc1.networkgear.net
//!     location: Virginia DC1
//!     make: F5
//!     end_of_support: 2025-12-31
//! ```

use netinv_core::NewInventoryRecord;
use serde::{Deserialize, Serialize};

/// Supported seed schema version
pub const SEED_SCHEMA_VERSION: u32 = 0;

/// Root of a seed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedV0 {
    pub schema_version: u32,
    #[serde(default)]
    pub inventory: Vec<NewInventoryRecord>,
}

//! Seed import system
//!
//! Provides:
//! - Seed format v0 schema
//! - YAML / JSON parser with validation
//! - Digest canonicalization
//! - Importer orchestration

pub mod digest;
pub mod format;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format::SeedV0;
pub use importer::{import_seed, import_seed_file, SeedImportReport};
pub use parser::{parse_seed_file, parse_seed_json, parse_seed_str};

//! Seed parser with validation
//!
//! Parses YAML or JSON and validates the schema version and name
//! uniqueness within the document. Dates are checked during
//! deserialization.

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format::{SeedV0, SEED_SCHEMA_VERSION};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file; `.json` files are read as JSON, anything else as YAML
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read seed file", e))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_seed_json(&content)
    } else {
        parse_seed_str(&content)
    }
}

/// Parse a YAML seed
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;
    Ok(seed)
}

/// Parse a JSON seed
pub fn parse_seed_json(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_json::from_str(content)
        .map_err(|e| seed_validation(&format!("JSON parse error: {}", e)))?;

    validate_seed(&seed)?;
    Ok(seed)
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != SEED_SCHEMA_VERSION {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected {}",
            seed.schema_version, SEED_SCHEMA_VERSION
        )));
    }

    let mut names = HashSet::new();
    for record in &seed.inventory {
        if let Some(name) = record.name.as_deref() {
            if !names.insert(name) {
                return Err(seed_validation(&format!("Duplicate name {} in seed", name)));
            }
        }
    }

    Ok(())
}

//! Field-level validation and normalization
//!
//! Form posts arrive as flat string maps; these helpers turn them into typed
//! values and report `MissingField` / `InvalidField` errors.

use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::{InventoryError, Result};

/// Date format accepted for `end_of_support`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trim a text value, treating blank input as absent
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse an ISO-8601 calendar date
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        InventoryError::InvalidField {
            field: field.to_string(),
            reason: format!("expected YYYY-MM-DD date ({})", e),
        }
    })
}

/// Parse an optional date, treating blank input as absent
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    normalize_text(value)
        .map(|v| parse_date(field, &v))
        .transpose()
}

/// Parse a record identifier
pub fn parse_record_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|e| InventoryError::InvalidField {
        field: "id".to_string(),
        reason: e.to_string(),
    })
}

/// Fetch a field that must be present in a submitted form
///
/// Presence is what is checked; an empty value is allowed and later
/// normalized to null.
pub fn require_field<'a>(form: &'a HashMap<String, String>, field: &str) -> Result<&'a str> {
    form.get(field)
        .map(String::as_str)
        .ok_or_else(|| InventoryError::MissingField {
            field: field.to_string(),
        })
}

/// Check that every listed field is present, reporting the first missing one
pub fn require_fields(form: &HashMap<String, String>, fields: &[&str]) -> Result<()> {
    for field in fields {
        require_field(form, field)?;
    }
    Ok(())
}

//! Form posts to typed inputs
//!
//! Forms arrive as flat string maps. Blank values become null; `state` is
//! the only field a form may leave out.

use netinv_core::errors::Result;
use netinv_core::rules::validation::{normalize_text, parse_optional_date, require_fields};
use netinv_core::{FieldPatch, InventoryPatch, NewInventoryRecord};
use std::collections::HashMap;

/// Fields every create/update form must carry
pub const REQUIRED_FIELDS: [&str; 8] = [
    "name",
    "ip_address",
    "location",
    "device_type",
    "make",
    "model",
    "os_version",
    "end_of_support",
];

fn text(form: &HashMap<String, String>, field: &str) -> Option<String> {
    normalize_text(form.get(field).map(String::as_str))
}

/// Build a create request from a submitted form
pub fn new_record_from_form(form: &HashMap<String, String>) -> Result<NewInventoryRecord> {
    require_fields(form, &REQUIRED_FIELDS)?;

    Ok(NewInventoryRecord {
        name: text(form, "name"),
        ip_address: text(form, "ip_address"),
        location: text(form, "location"),
        state: text(form, "state"),
        device_type: text(form, "device_type"),
        make: text(form, "make"),
        model: text(form, "model"),
        os_version: text(form, "os_version"),
        end_of_support: parse_optional_date(
            "end_of_support",
            form.get("end_of_support").map(String::as_str),
        )?,
    })
}

/// Build an update from a submitted edit form
///
/// Every required field is written. `state` is written only when the form
/// carries it.
pub fn patch_from_form(form: &HashMap<String, String>) -> Result<InventoryPatch> {
    let record = new_record_from_form(form)?;

    Ok(InventoryPatch {
        name: record.name.into(),
        ip_address: record.ip_address.into(),
        location: record.location.into(),
        state: if form.contains_key("state") {
            record.state.into()
        } else {
            FieldPatch::Omitted
        },
        device_type: record.device_type.into(),
        make: record.make.into(),
        model: record.model.into(),
        os_version: record.os_version.into(),
        end_of_support: record.end_of_support.into(),
    })
}

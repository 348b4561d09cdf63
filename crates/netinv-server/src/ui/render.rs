//! HTML rendering for the htmx UI
//!
//! Every interpolated value goes through [`escape`].

use netinv_core::InventoryRecord;

const HOME_PAGE: &str = include_str!("../../static/index.html");

/// Fragment returned after a form update
pub const RELOAD_SCRIPT: &str = "<script>window.location.reload();</script>";

/// Columns shown in the table and the edit form, in display order
const COLUMNS: [(&str, &str); 9] = [
    ("name", "Name"),
    ("ip_address", "IP Address"),
    ("location", "Location"),
    ("state", "State"),
    ("device_type", "Device Type"),
    ("make", "Make"),
    ("model", "Model"),
    ("os_version", "OS Version"),
    ("end_of_support", "End of Support"),
];

/// Escape text for HTML element content and quoted attributes
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn field_value(record: &InventoryRecord, field: &str) -> String {
    let value = match field {
        "name" => record.name.clone(),
        "ip_address" => record.ip_address.clone(),
        "location" => record.location.clone(),
        "state" => record.state.clone(),
        "device_type" => record.device_type.clone(),
        "make" => record.make.clone(),
        "model" => record.model.clone(),
        "os_version" => record.os_version.clone(),
        "end_of_support" => record.end_of_support.map(|d| d.to_string()),
        _ => None,
    };
    escape(value.as_deref().unwrap_or_default())
}

pub fn home_page() -> &'static str {
    HOME_PAGE
}

/// One `<tr>` per record
pub fn table_rows(records: &[InventoryRecord]) -> String {
    let mut html = String::new();
    for record in records {
        let id = record.id;
        html.push_str(&format!("<tr id=\"row-{}\">", id));
        for (field, _) in COLUMNS {
            html.push_str(&format!("<td>{}</td>", field_value(record, field)));
        }
        html.push_str(&format!(
            "<td>\
             <button hx-get=\"/inventory/{id}/edit\" hx-target=\"#row-{id}\" hx-swap=\"outerHTML\">Edit</button> \
             <button hx-delete=\"/inventory/{id}\" hx-confirm=\"Delete {name}?\">Delete</button>\
             </td></tr>\n",
            id = id,
            name = field_value(record, "name"),
        ));
    }
    html
}

/// Inline edit form replacing a table row
pub fn edit_form(record: &InventoryRecord) -> String {
    let id = record.id;
    let mut html = format!(
        "<tr id=\"row-{id}\"><td colspan=\"{span}\">\
         <form hx-patch=\"/inventory/{id}\" hx-target=\"#row-{id}\" hx-swap=\"outerHTML\">",
        id = id,
        span = COLUMNS.len() + 1,
    );
    for (field, label) in COLUMNS {
        let input_type = if field == "end_of_support" { "date" } else { "text" };
        html.push_str(&format!(
            "<label>{label} <input type=\"{input_type}\" name=\"{field}\" value=\"{value}\"></label>",
            value = field_value(record, field),
        ));
    }
    html.push_str(
        "<button type=\"submit\">Save</button> \
         <button hx-get=\"/inventory/add\" hx-target=\"#inventory-rows\">Cancel</button>\
         </form></td></tr>",
    );
    html
}

fn add_form() -> String {
    // htmx skips the swap on 4xx, so the error text is written by hand
    let mut html = String::from(
        "<form id=\"add-form\" hx-post=\"/inventory/add\" hx-target=\"#add-error\" \
         hx-on::before-request=\"document.getElementById('add-error').textContent = ''\" \
         hx-on::response-error=\"document.getElementById('add-error').textContent = \
         event.detail.xhr.responseText\">",
    );
    for (field, label) in COLUMNS {
        let input_type = if field == "end_of_support" { "date" } else { "text" };
        let required = if field == "state" { "" } else { " required" };
        html.push_str(&format!(
            "<label>{label} <input type=\"{input_type}\" name=\"{field}\"{required}></label>"
        ));
    }
    html.push_str("<button type=\"submit\">Add</button></form><div id=\"add-error\"></div>");
    html
}

/// Full inventory page: add form plus table
pub fn inventory_page(records: &[InventoryRecord]) -> String {
    let header: String = COLUMNS
        .iter()
        .map(|(_, label)| format!("<th>{}</th>", label))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <title>Inventory</title>\n  \
         <script src=\"https://unpkg.com/htmx.org@1.9.12\"></script>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> <a href=\"/inventory\">Inventory</a></nav>\n\
         <h1>Inventory</h1>\n{add_form}\n\
         <table>\n<thead><tr>{header}<th></th></tr></thead>\n\
         <tbody id=\"inventory-rows\">\n{rows}</tbody>\n</table>\n</body>\n</html>\n",
        add_form = add_form(),
        header = header,
        rows = table_rows(records),
    )
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// InventoryRecord - one network device
///
/// Every descriptive field is optional. `name`, when present, is unique
/// across all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Identifier generated at creation (UUID v7), never changes
    pub id: Uuid,

    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<String>,

    /// Operational state, e.g. `ONLINE`
    pub state: Option<String>,
    pub device_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub os_version: Option<String>,

    /// Vendor end-of-support date
    pub end_of_support: Option<NaiveDate>,
}

/// Input for creating a record
///
/// Any subset of fields may be supplied; missing keys deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewInventoryRecord {
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<String>,
    pub state: Option<String>,
    pub device_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub os_version: Option<String>,
    pub end_of_support: Option<NaiveDate>,
}

impl NewInventoryRecord {
    /// Convenience constructor for a record with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Assign the identifier, producing the record to be stored
    pub fn into_record(self, id: Uuid) -> InventoryRecord {
        InventoryRecord {
            id,
            name: self.name,
            ip_address: self.ip_address,
            location: self.location,
            state: self.state,
            device_type: self.device_type,
            make: self.make,
            model: self.model,
            os_version: self.os_version,
            end_of_support: self.end_of_support,
        }
    }
}

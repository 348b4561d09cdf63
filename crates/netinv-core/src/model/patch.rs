use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::record::InventoryRecord;

/// One field of a partial update
///
/// `Omitted` leaves the stored value untouched. `Present(None)` clears it,
/// `Present(Some(v))` overwrites it.
///
/// Deserializing a struct field of this type with `#[serde(default)]` maps a
/// missing key to `Omitted` and an explicit `null` to `Present(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    Omitted,
    Present(Option<T>),
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        FieldPatch::Omitted
    }
}

impl<T> FieldPatch<T> {
    /// Shorthand for `Present(Some(value))`
    pub fn set(value: T) -> Self {
        FieldPatch::Present(Some(value))
    }

    /// Shorthand for `Present(None)`
    pub fn clear() -> Self {
        FieldPatch::Present(None)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, FieldPatch::Present(_))
    }

    /// The value to write, if the field was supplied
    pub fn as_present(&self) -> Option<Option<&T>> {
        match self {
            FieldPatch::Omitted => None,
            FieldPatch::Present(value) => Some(value.as_ref()),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FieldPatch<U> {
        match self {
            FieldPatch::Omitted => FieldPatch::Omitted,
            FieldPatch::Present(value) => FieldPatch::Present(value.map(f)),
        }
    }
}

impl<T: Clone> FieldPatch<T> {
    /// Write the supplied value into `target`; `Omitted` is a no-op
    pub fn apply_to(&self, target: &mut Option<T>) {
        if let FieldPatch::Present(value) = self {
            *target = value.clone();
        }
    }
}

impl<T> From<Option<T>> for FieldPatch<T> {
    fn from(value: Option<T>) -> Self {
        FieldPatch::Present(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldPatch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(FieldPatch::Present)
    }
}

/// Sparse set of field assignments for one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryPatch {
    pub name: FieldPatch<String>,
    pub ip_address: FieldPatch<String>,
    pub location: FieldPatch<String>,
    pub state: FieldPatch<String>,
    pub device_type: FieldPatch<String>,
    pub make: FieldPatch<String>,
    pub model: FieldPatch<String>,
    pub os_version: FieldPatch<String>,
    pub end_of_support: FieldPatch<NaiveDate>,
}

impl InventoryPatch {
    /// Column names of the supplied fields, in declaration order
    pub fn provided_fields(&self) -> Vec<&'static str> {
        let flags = [
            ("name", self.name.is_present()),
            ("ip_address", self.ip_address.is_present()),
            ("location", self.location.is_present()),
            ("state", self.state.is_present()),
            ("device_type", self.device_type.is_present()),
            ("make", self.make.is_present()),
            ("model", self.model.is_present()),
            ("os_version", self.os_version.is_present()),
            ("end_of_support", self.end_of_support.is_present()),
        ];
        flags
            .into_iter()
            .filter_map(|(field, present)| present.then_some(field))
            .collect()
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.provided_fields().is_empty()
    }

    /// Apply the supplied fields to an in-memory record
    pub fn apply_to(&self, record: &mut InventoryRecord) {
        self.name.apply_to(&mut record.name);
        self.ip_address.apply_to(&mut record.ip_address);
        self.location.apply_to(&mut record.location);
        self.state.apply_to(&mut record.state);
        self.device_type.apply_to(&mut record.device_type);
        self.make.apply_to(&mut record.make);
        self.model.apply_to(&mut record.model);
        self.os_version.apply_to(&mut record.os_version);
        self.end_of_support.apply_to(&mut record.end_of_support);
    }
}

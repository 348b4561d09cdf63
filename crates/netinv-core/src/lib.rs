//! Inventory core - domain model and shared facilities
//!
//! This crate provides the foundational pieces every transport builds on:
//! - `InventoryRecord` and its create/patch input shapes
//! - Three-state `FieldPatch` for partial updates
//! - Input validation rules shared by the form and API layers
//! - The error facility (`InventoryError` / `ExError`)
//! - The structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, InventoryError, Result};
pub use model::{FieldPatch, InventoryPatch, InventoryRecord, NewInventoryRecord};

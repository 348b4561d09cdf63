pub mod patch;
pub mod record;

pub use patch::{FieldPatch, InventoryPatch};
pub use record::{InventoryRecord, NewInventoryRecord};

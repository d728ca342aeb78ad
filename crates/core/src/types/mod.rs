//! Domain record types shared across Parcelbot crates.

mod inventory;
mod order;

pub use inventory::{CatalogMap, InventoryItem};
pub use order::{Order, OrderMap};

//! Inventory catalog records.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entries keyed by `item_id`, preserving file order.
///
/// Iteration order matters: the item resolver breaks match ties by taking
/// the first entry encountered in stored order.
pub type CatalogMap = IndexMap<String, InventoryItem>;

/// A single catalog entry.
///
/// Read-only in this system; no handler mutates inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique catalog code (e.g. "item4").
    #[serde(rename = "item")]
    pub item_id: String,
    /// Human-readable name, used for both matching and display.
    pub display_name: String,
    /// Units on hand. Zero means out-of-stock, not absent.
    pub quantity: u32,
    /// Unit price.
    pub price: Decimal,
}

impl InventoryItem {
    /// Whether at least one unit is on hand.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

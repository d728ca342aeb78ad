//! Customer order records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Orders keyed by `order_id`, preserving the order they were loaded in.
///
/// The full mapping is rewritten on every mutation, so insertion order
/// doubles as file order across a load/save round trip.
pub type OrderMap = IndexMap<String, Order>;

/// A single customer order.
///
/// Orders are created externally (pre-seeded dataset) and never created or
/// deleted by this system; the only mutation is a delivery date change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier (primary key).
    pub order_id: String,
    /// Display name of the ordered product.
    pub product_name: String,
    /// Expected delivery date. Stored as an opaque string: the source data
    /// carries no fixed format and no validation is performed on updates.
    pub delivery_date: String,
    /// Lifecycle status (e.g. "pending", "shipped"). Free-form in the
    /// source data, so deliberately not a closed enum.
    pub status: String,
}

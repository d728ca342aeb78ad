//! `action_check_order_status`: read-only order lookup.

use tracing::warn;

use crate::state::AppState;

use super::{ActionResponse, Tracker};

/// Look up an order by the `order_id` slot and report its status.
///
/// Read failures degrade to an empty dataset (the user sees not-found,
/// never an internal error). No side effects.
pub fn run(state: &AppState, tracker: &Tracker) -> ActionResponse {
    let Some(order_id) = tracker.slot("order_id") else {
        return ActionResponse::say("Please provide the order ID.");
    };

    let orders = state.orders().load().unwrap_or_else(|e| {
        warn!(error = %e, "orders read failed, degrading to empty dataset");
        parcelbot_core::OrderMap::new()
    });

    orders.get(order_id).map_or_else(
        || ActionResponse::say(format!("❌ Order {order_id} not found.")),
        |order| {
            ActionResponse::say(format!(
                "✅ Order **{order_id}** is currently *{}*.\n\
                 📦 Product: {}\n\
                 📅 Expected delivery date: {}.",
                order.status, order.product_name, order.delivery_date
            ))
        },
    )
}

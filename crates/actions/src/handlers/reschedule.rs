//! `action_reschedule_order`: update an order's delivery date.

use tracing::warn;

use crate::state::AppState;

use super::{ActionResponse, Tracker};

/// Change the delivery date of the order named by the `order_id` slot to
/// the `date` slot value, persisting the whole dataset back.
///
/// The new date is passed through the normalizer service when one is
/// configured (falling back to the raw slot on failure); beyond that no
/// format or plausibility validation is performed - a known gap carried
/// over from the source system. A failed write is reported to the user
/// rather than confirmed as success.
pub async fn run(state: &AppState, tracker: &Tracker) -> ActionResponse {
    let (Some(order_id), Some(new_date)) = (tracker.slot("order_id"), tracker.slot("date")) else {
        return ActionResponse::say("Please provide both order ID and new delivery date.");
    };

    let new_date = normalize_date(state, new_date).await;

    let mut orders = state.orders().load().unwrap_or_else(|e| {
        warn!(error = %e, "orders read failed, degrading to empty dataset");
        parcelbot_core::OrderMap::new()
    });

    let Some(order) = orders.get_mut(order_id) else {
        return ActionResponse::say(format!("❌ Order {order_id} not found."));
    };
    order.delivery_date.clone_from(&new_date);

    match state.orders().save(&orders) {
        Ok(()) => ActionResponse::say(format!(
            "✅ Order {order_id} delivery date has been successfully updated to {new_date}."
        )),
        Err(e) => {
            warn!(error = %e, "orders write failed, update dropped");
            ActionResponse::say(format!(
                "⚠️ Sorry, the new delivery date for order {order_id} could not be saved. \
                 Please try again."
            ))
        }
    }
}

/// Run the date slot through the normalizer service, if configured.
async fn normalize_date(state: &AppState, raw: &str) -> String {
    let Some(normalizer) = state.normalizer() else {
        return raw.to_string();
    };
    match normalizer.normalize(raw).await {
        Ok(normalized) => normalized,
        Err(e) => {
            warn!(error = %e, "date normalization failed, using raw slot value");
            raw.to_string()
        }
    }
}

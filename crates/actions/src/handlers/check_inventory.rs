//! `action_check_inventory`: inventory listing and stock lookups.
//!
//! The branching lives in [`crate::resolver`]; this handler loads the
//! live catalog, picks the structured hint out of the slots, and renders
//! exactly one message path per invocation.

use std::fmt::Write;

use tracing::warn;

use crate::resolver::Resolution;
use crate::state::AppState;

use super::{ActionResponse, Tracker};

/// Answer a stock question from the `item_code`/`item` slots and the
/// latest user message.
pub fn run(state: &AppState, tracker: &Tracker) -> ActionResponse {
    let catalog = state.inventory().load().unwrap_or_else(|e| {
        warn!(error = %e, "inventory read failed, degrading to empty catalog");
        parcelbot_core::CatalogMap::new()
    });

    // item_code is the more specific slot; fall back to the looser one.
    let hint = tracker.slot("item_code").or_else(|| tracker.slot("item"));

    match state
        .resolver()
        .resolve(hint, &tracker.latest_message.text, &catalog)
    {
        Resolution::ListAll(items) => {
            let mut listing = String::from("📋 **Available Items:**\n\n");
            for entry in &items {
                let _ = writeln!(listing, "• {} — ${}", entry.display_name, entry.price);
            }
            ActionResponse::from_texts(vec![
                listing.trim_end().to_string(),
                "Which specific item would you like to check?".to_string(),
            ])
        }
        Resolution::NoData => ActionResponse::say("❌ No inventory data available."),
        Resolution::NoSearchTerm => ActionResponse::say(
            "❌ I couldn't understand which item you're looking for. \
             Please try 'check stock' to see all items.",
        ),
        Resolution::Found { item, in_stock } => {
            if in_stock {
                ActionResponse::say(format!(
                    "✅ {} is in stock!\n\
                     📦 Quantity available: {} units\n\
                     💲 Price: ${} each",
                    item.display_name, item.quantity, item.price
                ))
            } else {
                ActionResponse::say(format!(
                    "⚠️ Sorry, {} is currently out of stock.",
                    item.display_name
                ))
            }
        }
        Resolution::NoMatch { term } => ActionResponse::say(format!(
            "❌ Sorry, I couldn't find an item matching '{term}'.\n\n\
             Please type 'check inventory' to see all available items, or try searching by name.",
        )),
    }
}

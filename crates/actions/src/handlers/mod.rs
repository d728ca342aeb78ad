//! Named action handlers and the webhook wire types.
//!
//! The external dialogue orchestrator calls this server with the standard
//! action-server payload: the action to run, the conversation tracker
//! (slots plus the latest user message), and a sender id. Handlers answer
//! with zero or more plain-text responses; the only side effect any of
//! them has is the orders-file rewrite performed by the reschedule action.

mod check_inventory;
mod check_status;
mod reschedule;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Incoming webhook payload from the orchestrator.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    /// Name of the action to execute.
    pub next_action: String,
    /// Conversation identifier.
    #[serde(default)]
    pub sender_id: String,
    /// Conversation state as tracked by the orchestrator.
    #[serde(default)]
    pub tracker: Tracker,
}

/// The slice of conversation state handlers care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tracker {
    /// Named slot values extracted by the orchestrator. Values may be
    /// null or non-string; [`Tracker::slot`] filters those out.
    #[serde(default)]
    pub slots: HashMap<String, serde_json::Value>,
    /// The latest raw user message.
    #[serde(default)]
    pub latest_message: LatestMessage,
}

/// Latest user message as forwarded by the orchestrator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestMessage {
    /// Raw message text.
    #[serde(default)]
    pub text: String,
}

impl Tracker {
    /// A slot value, if present, a string, and non-empty after trimming.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Webhook response: messages for the user plus (always empty) events.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    /// Conversation events to apply. This server emits none.
    pub events: Vec<serde_json::Value>,
    /// Messages to show the user, in order.
    pub responses: Vec<BotMessage>,
}

/// One plain-text message for the user.
#[derive(Debug, Clone, Serialize)]
pub struct BotMessage {
    /// Message text.
    pub text: String,
}

impl ActionResponse {
    /// A response carrying a single message.
    #[must_use]
    pub fn say(text: impl Into<String>) -> Self {
        Self::from_texts(vec![text.into()])
    }

    /// A response carrying the given messages in order.
    #[must_use]
    pub fn from_texts(texts: Vec<String>) -> Self {
        Self {
            events: Vec::new(),
            responses: texts.into_iter().map(|text| BotMessage { text }).collect(),
        }
    }
}

/// Dispatch a webhook request to the named action.
///
/// # Errors
///
/// Returns [`AppError::UnknownAction`] if the action name is not
/// registered. Handler-internal failures (storage, services) surface as
/// plain user-facing messages, never as errors.
#[instrument(skip(state, request), fields(action = %request.next_action, sender = %request.sender_id))]
pub async fn dispatch(state: &AppState, request: &ActionRequest) -> Result<ActionResponse, AppError> {
    match request.next_action.as_str() {
        "action_check_order_status" => Ok(check_status::run(state, &request.tracker)),
        "action_reschedule_order" => Ok(reschedule::run(state, &request.tracker).await),
        "action_check_inventory" => Ok(check_inventory::run(state, &request.tracker)),
        other => Err(AppError::UnknownAction(other.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tracker_slot_filters_null_and_blank() {
        let tracker: Tracker = serde_json::from_value(serde_json::json!({
            "slots": {
                "order_id": "O1",
                "date": null,
                "item": "   ",
                "count": 3
            },
            "latest_message": { "text": "hi" }
        }))
        .unwrap();

        assert_eq!(tracker.slot("order_id"), Some("O1"));
        assert_eq!(tracker.slot("date"), None);
        assert_eq!(tracker.slot("item"), None);
        assert_eq!(tracker.slot("count"), None);
        assert_eq!(tracker.slot("missing"), None);
    }

    #[test]
    fn request_parses_minimal_payload() {
        let request: ActionRequest = serde_json::from_str(
            r#"{"next_action":"action_check_inventory"}"#,
        )
        .unwrap();
        assert_eq!(request.next_action, "action_check_inventory");
        assert!(request.sender_id.is_empty());
        assert!(request.tracker.latest_message.text.is_empty());
    }

    #[test]
    fn response_serializes_with_empty_events() {
        let response = ActionResponse::say("hello");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["events"], serde_json::json!([]));
        assert_eq!(json["responses"][0]["text"], "hello");
    }
}

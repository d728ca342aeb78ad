//! Unified error handling for the action server.
//!
//! Handlers never surface storage or service failures here - those render
//! as plain user-facing messages inside the handler. What remains is the
//! protocol-level failure of being asked to run an action this server
//! does not know.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the webhook surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// The orchestrator asked for an action that is not registered.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "webhook request error");

        let status = match &self {
            Self::UnknownAction(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_maps_to_bad_request() {
        let response = AppError::UnknownAction("action_nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

//! HTTP surface of the action server.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::handlers::{self, ActionRequest, ActionResponse};
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health))
        .with_state(state)
}

/// `POST /webhook` - execute a named action against the conversation
/// tracker and return the messages to show the user.
async fn webhook(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let response = handlers::dispatch(&state, &request).await?;
    Ok(Json(response))
}

/// `GET /health` - liveness probe.
async fn health() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
    }))
}

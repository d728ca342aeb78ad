//! Parcelbot action server binary.
//!
//! Serves the custom action webhook consumed by the external dialogue
//! framework (default port 5055). The intent classifier and text
//! normalizer run as separate services; this binary only talks to the
//! normalizer, and only when `NORMALIZER_URL` is configured.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parcelbot_actions::config::ActionsConfig;
use parcelbot_actions::routes;
use parcelbot_actions::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ActionsConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "parcelbot_actions=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.socket_addr();
    let state = AppState::new(config).expect("Failed to create application state");

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    tracing::info!("action server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolve when the process receives a shutdown request.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}

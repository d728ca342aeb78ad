//! Integration tests for Parcelbot.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p parcelbot-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `webhook_actions` - Full action dispatch over seeded CSV fixtures
//! - `resolver_properties` - Disambiguation and matching guarantees
//!
//! No external services are required: the normalizer/classifier clients
//! stay unconfigured, and all storage lives in per-test temp directories.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use parcelbot_actions::config::ActionsConfig;
use parcelbot_actions::state::AppState;

/// Build an [`AppState`] over CSV fixtures in a temp directory.
///
/// `orders_rows` / `inventory_rows` are raw CSV data lines (header
/// excluded). Panics on setup failure; fixtures only.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn fixture_state(
    orders_rows: &[&str],
    inventory_rows: &[&str],
) -> (tempfile::TempDir, AppState) {
    fixture_state_with_normalizer(orders_rows, inventory_rows, None)
}

/// Like [`fixture_state`], but with a date-normalizer endpoint configured.
///
/// Tests pass an unreachable address here to exercise the degraded path
/// without standing up a service.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn fixture_state_with_normalizer(
    orders_rows: &[&str],
    inventory_rows: &[&str],
    normalizer_url: Option<&str>,
) -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        &dir.path().join("orders.csv"),
        "order_id,product_name,delivery_date,status",
        orders_rows,
    );
    write_csv(
        &dir.path().join("inventory.csv"),
        "item,display_name,quantity,price",
        inventory_rows,
    );

    let config = ActionsConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        orders_path: dir.path().join("orders.csv"),
        inventory_path: dir.path().join("inventory.csv"),
        terms_path: None,
        normalizer_url: normalizer_url.map(str::to_string),
        classifier_url: None,
    };
    let state = AppState::new(config).unwrap();
    (dir, state)
}

#[allow(clippy::unwrap_used)]
fn write_csv(path: &Path, header: &str, rows: &[&str]) {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(path, contents).unwrap();
}

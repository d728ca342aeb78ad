//! Flat-file record store for orders and inventory.
//!
//! Both datasets live as headered CSV files and are re-read in full on
//! every handler invocation - there is no cross-call cache, so concurrent
//! invocations never share mutable in-memory state. Consistency across
//! writers is delegated to the filesystem: the orders file is rewritten
//! wholesale on update, last-writer-wins.
//!
//! # Degraded reads
//!
//! A missing backing file loads as an empty dataset with a warning, and
//! rows that fail to parse are skipped (also with a warning) rather than
//! aborting the whole load. Genuine I/O failures are returned as typed
//! errors so the caller can decide what to surface to the user.

pub mod inventory;
pub mod orders;

use thiserror::Error;

pub use inventory::InventoryStore;
pub use orders::OrderStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Backing file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed while writing a record.
    #[error("failed to serialize record for {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: csv::Error,
    },
}

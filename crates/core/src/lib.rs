//! Parcelbot Core - Shared types library.
//!
//! This crate provides common types used across all Parcelbot components:
//! - `actions` - The custom action server invoked by the dialogue framework
//! - `cli` - Command-line tools for seeding data and validating configuration
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no file
//! parsing. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Order and inventory record types and their ordered collections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

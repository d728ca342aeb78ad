//! Parcelbot action server library.
//!
//! This crate provides the custom action handlers as a library, allowing
//! them to be tested and reused by the CLI.
//!
//! # Architecture
//!
//! The external dialogue framework extracts slots, tracks conversation
//! state, and invokes named actions over `POST /webhook`. Each invocation
//! re-reads the flat-file record store, optionally runs the item resolver,
//! mutates the store if needed (reschedule), and returns plain-text
//! responses.
//!
//! # Modules
//!
//! - [`store`] - CSV-backed order and inventory stores
//! - [`resolver`] - intent disambiguation and fuzzy item matching
//! - [`handlers`] - the named actions and webhook wire types
//! - [`services`] - thin clients for the classifier/normalizer services

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod handlers;
pub mod resolver;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

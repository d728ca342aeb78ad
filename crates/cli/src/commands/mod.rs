//! CLI command implementations.

pub mod intent;
pub mod seed;
pub mod validate;

//! Configuration types for Teamdeck.
//!
//! This crate provides the configuration read from
//! `.teamdeck/config.yaml` files.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;

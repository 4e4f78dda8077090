//! Teamdeck CLI library.
//!
//! Evaluates the policy engine against a snapshot of profiles, teams,
//! tasks, files and meetings.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod snapshot;

pub use error::CliError;

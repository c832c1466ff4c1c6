//! Shared plumbing for the `useful` crates: errors, configuration and constants.

pub mod config;
pub mod constants;
pub mod error;

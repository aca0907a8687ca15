//! Shared helpers for the bizboard services.
//! - Environment checks for the auth provider's configuration.
//! - Process-wide logging initialization.

pub mod env;
pub mod utils;

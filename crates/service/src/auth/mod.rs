//! Auth failure translation: catalog, handler, and log sinks.
//!
//! This module centralizes the mapping of provider error codes to the
//! user-facing messages returned to the UI layer.

pub mod catalog;
pub mod domain;
pub mod errors;
pub mod handler;
pub mod sink;

pub use handler::AuthErrorTranslator;

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::debug;

use super::catalog::ErrorCatalog;
use super::domain::{AuthFailure, LogEntry, NormalizedResult};
use super::sink::{LogSink, TracingSink};

/// Result fields that caller context may not override.
const RESERVED_KEYS: [&str; 3] = ["success", "message", "code"];

/// Translates provider auth failures into user-facing results.
///
/// Stateless request/response utility: each call resolves the message through
/// the catalog, emits a diagnostic entry through the sink, and returns a
/// [`NormalizedResult`]. No input makes this path panic or return an error.
///
/// # Examples
/// ```
/// use service::auth::AuthErrorTranslator;
/// use service::auth::domain::AuthFailure;
///
/// let translator = AuthErrorTranslator::with_defaults();
/// let failure = AuthFailure::from_code("auth/user-not-found");
/// let result = translator.handle(Some(&failure), serde_json::Map::new());
/// assert!(!result.success);
/// assert_eq!(result.message, "No user found with this email address.");
/// ```
pub struct AuthErrorTranslator {
    catalog: Arc<ErrorCatalog>,
    sink: Arc<dyn LogSink>,
    log_raw_errors: bool,
}

impl AuthErrorTranslator {
    pub fn new(catalog: Arc<ErrorCatalog>, sink: Arc<dyn LogSink>) -> Self {
        Self { catalog, sink, log_raw_errors: true }
    }

    /// Built-in catalog plus the `tracing` sink.
    pub fn with_defaults() -> Self {
        Self::new(ErrorCatalog::builtin(), Arc::new(TracingSink))
    }

    /// Toggle emission of the raw incoming error to the sink. On by default;
    /// diagnostic volume is proportional to error volume, not error rarity.
    pub fn log_raw_errors(mut self, enabled: bool) -> Self {
        self.log_raw_errors = enabled;
        self
    }

    /// Message-only lookup for callers that do not need the full result.
    pub fn translate(&self, code: Option<&str>) -> &str {
        self.catalog.resolve(code)
    }

    /// Normalize a failure into a result for the UI layer.
    ///
    /// An absent `error` maps to the default message with an absent code.
    /// Context keys colliding with the reserved result fields are dropped
    /// rather than silently overriding them.
    pub fn handle(
        &self,
        error: Option<&AuthFailure>,
        mut context: Map<String, Value>,
    ) -> NormalizedResult {
        let code = error.and_then(|e| e.code.clone());
        let message = self.catalog.resolve(code.as_deref()).to_string();

        for key in RESERVED_KEYS {
            if context.remove(key).is_some() {
                debug!(key, "dropped reserved key from caller context");
            }
        }

        if self.log_raw_errors {
            let entry = LogEntry {
                timestamp: Utc::now(),
                message: message.clone(),
                original: error
                    .map(|e| serde_json::to_value(e).unwrap_or(Value::Null)),
                context: context.clone(),
            };
            self.sink.log(&entry);
        }

        NormalizedResult { success: false, message, code, context }
    }
}

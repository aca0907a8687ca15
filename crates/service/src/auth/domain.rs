use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An authentication failure as reported by the provider.
///
/// Only `code` is interpreted; any other fields the provider attaches are
/// captured verbatim and passed through to the log sink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl AuthFailure {
    pub fn from_code(code: impl Into<String>) -> Self {
        Self { code: Some(code.into()), details: Map::new() }
    }
}

/// Normalized failure record returned to callers.
///
/// Serializes flat as `{ success, message, code, ...context }`, suitable for
/// a UI layer or an API response body. `success` is always `false` on this
/// path and `message` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

/// Diagnostic record handed to a [`sink::LogSink`](super::sink::LogSink).
///
/// The timestamp is the entry's creation time, not the error time. Never
/// persisted by this crate.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub original: Option<Value>,
    pub context: Map<String, Value>,
}

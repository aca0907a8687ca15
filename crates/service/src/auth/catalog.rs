use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::errors::CatalogError;

/// Reserved key whose entry is the fallback for absent or unknown codes.
pub const DEFAULT_KEY: &str = "default";

/// Immutable mapping from provider error codes to user-facing messages.
///
/// Constructed once and shared read-only; every lookup resolves to a
/// non-empty message, unknown and absent codes resolve to the default entry.
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    entries: HashMap<String, String>,
    default_message: String,
}

impl ErrorCatalog {
    /// Build a catalog from `(code, message)` pairs.
    ///
    /// Fails fast when the `"default"` entry is missing or any message is
    /// empty, so a broken catalog is caught at startup rather than at the
    /// first failed login.
    pub fn new<I, K, V>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: HashMap<String, String> =
            entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        for (code, message) in &entries {
            if message.trim().is_empty() {
                return Err(CatalogError::EmptyMessage(code.clone()));
            }
        }
        let default_message = entries
            .get(DEFAULT_KEY)
            .cloned()
            .ok_or(CatalogError::MissingDefault)?;
        Ok(Self { entries, default_message })
    }

    /// Resolve a possibly-absent code to its user-facing message.
    pub fn resolve(&self, code: Option<&str>) -> &str {
        code.and_then(|c| self.entries.get(c))
            .map(String::as_str)
            .unwrap_or(&self.default_message)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The process-wide catalog covering the provider's common `auth/*` codes.
    pub fn builtin() -> Arc<ErrorCatalog> {
        BUILTIN.clone()
    }
}

static BUILTIN: Lazy<Arc<ErrorCatalog>> = Lazy::new(|| {
    let catalog = ErrorCatalog::new([
        ("auth/wrong-password", "Incorrect password. Please try again."),
        ("auth/user-not-found", "No user found with this email address."),
        ("auth/email-already-in-use", "An account with this email address already exists."),
        ("auth/invalid-email", "Please enter a valid email address."),
        ("auth/weak-password", "Password should be at least 6 characters."),
        ("auth/user-disabled", "This account has been disabled."),
        ("auth/too-many-requests", "Too many failed attempts. Please try again later."),
        ("auth/network-request-failed", "A network error occurred. Please check your connection."),
        ("auth/requires-recent-login", "Please sign in again to complete this action."),
        ("auth/popup-closed-by-user", "The sign-in window was closed before completing."),
        ("auth/operation-not-allowed", "This sign-in method is not enabled."),
        ("auth/invalid-credential", "The provided credentials are invalid or have expired."),
        (DEFAULT_KEY, "An unexpected error occurred. Please try again."),
    ])
    .expect("built-in catalog carries a default entry");
    Arc::new(catalog)
});

//! Credential resolution
//!
//! A credential is resolved once at startup, in order: the provider's
//! environment variable, then an optional local secret file. The file
//! fallback is a weak practice kept only for compatibility with earlier
//! variants of this tool — plaintext keys in the working directory are
//! easy to commit by accident. Prefer the environment variable.

use std::path::Path;
use tracing::{debug, warn};

/// An opaque bearer token (Value Object)
///
/// `Debug` and `Display` are redacted so the token can never leak through
/// logs; only [`reveal()`](Credential::reveal) exposes the full value, at
/// the point the authorization header is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The full token, for the authorization header only.
    pub fn reveal(&self) -> &str {
        &self.0
    }

    fn redacted(&self) -> String {
        let tail: String = self
            .0
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("…{tail}")
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential({})", self.redacted())
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

/// Resolve a credential from `variable`, falling back to `secret_file`.
///
/// Returns `None` when neither source yields a non-empty token; the
/// gateway then fails with `MissingCredential` before any network attempt.
/// Values are trimmed so a trailing newline in a secret file is harmless.
pub fn resolve_credential(variable: &str, secret_file: Option<&Path>) -> Option<Credential> {
    if let Ok(value) = std::env::var(variable) {
        let value = value.trim();
        if !value.is_empty() {
            debug!(%variable, "credential resolved from environment");
            return Some(Credential::new(value));
        }
    }

    if let Some(path) = secret_file {
        if let Ok(contents) = std::fs::read_to_string(path) {
            let contents = contents.trim();
            if !contents.is_empty() {
                warn!(
                    path = %path.display(),
                    "credential read from plaintext secret file; prefer {variable}"
                );
                return Some(Credential::new(contents));
            }
        }
    }

    None
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid campaign request: {0}")]
    InvalidRequest(String),
}

impl DomainError {
    /// Build the error for the one combination the CLI surface allows but
    /// no variant of the tool ever defined: both content filters at once.
    pub fn conflicting_filters() -> Self {
        DomainError::InvalidRequest(
            "--emails-only and --social-only cannot be combined".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let error = DomainError::InvalidRequest("bad".to_string());
        assert_eq!(error.to_string(), "invalid campaign request: bad");
    }

    #[test]
    fn test_conflicting_filters_names_both_flags() {
        let message = DomainError::conflicting_filters().to_string();
        assert!(message.contains("--emails-only"));
        assert!(message.contains("--social-only"));
    }
}

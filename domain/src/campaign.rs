//! Campaign request entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Everything the prompt is built from (Value Object)
///
/// Constructed once per invocation from parsed arguments and configuration,
/// then immutable. Validation happens at the boundary via [`validate()`];
/// downstream code may assume a validated request.
///
/// [`validate()`]: CampaignRequest::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    /// Name of the event or campaign
    pub event: String,
    /// Date of the event (free-form, "TBD" when unknown)
    pub date: String,
    /// Tone for the copy (e.g. upbeat, formal, urgent)
    pub tone: String,
    /// Additional context appended to the prompt; empty contributes nothing
    pub additional_context: String,
    /// Number of fundraising emails to ask for
    pub email_count: u32,
    /// Number of social captions to ask for
    pub social_count: u32,
    /// Suppress the social-caption clause
    pub emails_only: bool,
    /// Suppress the fundraising-email clause
    pub social_only: bool,
    /// Verbatim prompt override; bypasses the template entirely
    pub custom_prompt: Option<String>,
}

impl Default for CampaignRequest {
    fn default() -> Self {
        Self {
            event: "Community Gala".to_string(),
            date: "TBD".to_string(),
            tone: "upbeat".to_string(),
            additional_context: String::new(),
            email_count: 5,
            social_count: 4,
            emails_only: false,
            social_only: false,
            custom_prompt: None,
        }
    }
}

impl CampaignRequest {
    // ==================== Builder Methods ====================

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_additional_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = context.into();
        self
    }

    pub fn with_counts(mut self, emails: u32, socials: u32) -> Self {
        self.email_count = emails;
        self.social_count = socials;
        self
    }

    pub fn emails_only(mut self) -> Self {
        self.emails_only = true;
        self
    }

    pub fn social_only(mut self) -> Self {
        self.social_only = true;
        self
    }

    pub fn with_custom_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(prompt.into());
        self
    }

    /// Validate the request at the boundary.
    ///
    /// `emails_only` and `social_only` together would leave nothing to
    /// generate; no variant of the tool ever defined that combination, so
    /// it is rejected rather than guessed at.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.emails_only && self.social_only {
            return Err(DomainError::conflicting_filters());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = CampaignRequest::default();
        assert_eq!(request.event, "Community Gala");
        assert_eq!(request.date, "TBD");
        assert_eq!(request.tone, "upbeat");
        assert_eq!(request.email_count, 5);
        assert_eq!(request.social_count, 4);
        assert!(request.custom_prompt.is_none());
    }

    #[test]
    fn test_builder() {
        let request = CampaignRequest::default()
            .with_event("Spring Gala")
            .with_date("2025-05-30")
            .with_counts(2, 1);
        assert_eq!(request.event, "Spring Gala");
        assert_eq!(request.date, "2025-05-30");
        assert_eq!(request.email_count, 2);
        assert_eq!(request.social_count, 1);
    }

    #[test]
    fn test_default_request_is_valid() {
        assert!(CampaignRequest::default().validate().is_ok());
    }

    #[test]
    fn test_single_filter_is_valid() {
        assert!(CampaignRequest::default().emails_only().validate().is_ok());
        assert!(CampaignRequest::default().social_only().validate().is_ok());
    }

    #[test]
    fn test_both_filters_rejected() {
        let request = CampaignRequest::default().emails_only().social_only();
        let error = request.validate().unwrap_err();
        assert!(matches!(error, DomainError::InvalidRequest(_)));
    }
}

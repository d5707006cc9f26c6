//! Prompt template for campaign copy generation

use crate::campaign::CampaignRequest;

/// Template for the single instruction sent to the provider
pub struct PromptTemplate;

impl PromptTemplate {
    /// Compose the campaign prompt.
    ///
    /// Pure and deterministic: no I/O, no side effects, identical input
    /// yields identical output, and it never fails for a validated request.
    ///
    /// Rules:
    /// - A non-empty `custom_prompt` is returned verbatim; every other
    ///   field is ignored.
    /// - The email clause is suppressed by `social_only`, the social clause
    ///   by `emails_only`; both present are joined with "and".
    /// - Counts of zero still render ("0 fundraising emails") unless the
    ///   clause itself is suppressed.
    /// - An empty `additional_context` leaves no trailing separator.
    pub fn campaign(request: &CampaignRequest) -> String {
        if let Some(custom) = &request.custom_prompt {
            if !custom.is_empty() {
                return custom.clone();
            }
        }

        let mut clauses = Vec::with_capacity(2);
        if !request.social_only {
            clauses.push(format!("{} fundraising emails", request.email_count));
        }
        if !request.emails_only {
            clauses.push(format!("{} social captions", request.social_count));
        }

        let mut prompt = format!(
            "Write {} for the {} on {} in a {} tone.",
            clauses.join(" and "),
            request.event,
            request.date,
            request.tone,
        );

        if !request.additional_context.is_empty() {
            prompt.push(' ');
            prompt.push_str(&request.additional_context);
        }

        prompt
    }
}

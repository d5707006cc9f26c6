//! Completion provider adapters
//!
//! One adapter per provider wire contract, all behind the
//! [`CompletionGateway`] port. Earlier variants of this tool duplicated
//! the whole script per provider; here the provider is a configuration
//! value selected at wiring time.

mod gemini;
mod openrouter;

pub use gemini::GeminiGateway;
pub use openrouter::OpenRouterGateway;

use crate::credentials::Credential;
use fundcraft_application::CompletionGateway;
use std::sync::Arc;

/// Which provider contract a run is wired against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    /// OpenAI-style `choices[].message.content` responses.
    #[default]
    OpenRouter,
    /// Gemini-style `candidates[].content.parts[].text` responses.
    Gemini,
}

impl Provider {
    /// Environment variable holding this provider's API key.
    pub fn credential_variable(&self) -> &'static str {
        match self {
            Provider::OpenRouter => "OPENROUTER_API_KEY",
            Provider::Gemini => "GEMINI_API_KEY",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenRouter => "openrouter",
            Provider::Gemini => "gemini",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openrouter" => Ok(Provider::OpenRouter),
            "gemini" => Ok(Provider::Gemini),
            other => Err(format!(
                "unknown provider '{other}' (expected 'openrouter' or 'gemini')"
            )),
        }
    }
}

/// Build the gateway adapter for `provider`.
///
/// `credential` is `None` when resolution found nothing; the adapter then
/// reports `MissingCredential` on first use, before any network attempt.
pub fn create_gateway(
    provider: Provider,
    credential: Option<Credential>,
) -> Arc<dyn CompletionGateway> {
    match provider {
        Provider::OpenRouter => Arc::new(OpenRouterGateway::new(credential)),
        Provider::Gemini => Arc::new(GeminiGateway::new(credential)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_roundtrip() {
        for provider in [Provider::OpenRouter, Provider::Gemini] {
            let parsed: Provider = provider.as_str().parse().unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let error = "claude".parse::<Provider>().unwrap_err();
        assert!(error.contains("claude"));
    }

    #[test]
    fn test_credential_variables() {
        assert_eq!(
            Provider::OpenRouter.credential_variable(),
            "OPENROUTER_API_KEY"
        );
        assert_eq!(Provider::Gemini.credential_variable(), "GEMINI_API_KEY");
    }
}

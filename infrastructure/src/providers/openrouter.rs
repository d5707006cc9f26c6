//! OpenRouter gateway adapter
//!
//! Speaks the OpenAI-style chat-completion contract: a single POST with
//! `{model, messages, temperature}` and a `choices[0].message.content`
//! response. Body classification is kept in pure functions so the ordering
//! contract (status before parse before shape) is testable without a
//! server.

use crate::credentials::Credential;
use async_trait::async_trait;
use fundcraft_application::{
    BODY_EXCERPT_MAX, Completion, CompletionGateway, CompletionRequest, GatewayError, ModelInfo,
};
use fundcraft_domain::truncate_str;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const OPENROUTER_MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Gateway adapter for OpenRouter.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    credential: Option<Credential>,
    endpoint: String,
    models_endpoint: String,
}

impl OpenRouterGateway {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            client: reqwest::Client::new(),
            credential,
            endpoint: OPENROUTER_API_URL.to_string(),
            models_endpoint: OPENROUTER_MODELS_URL.to_string(),
        }
    }

    /// Override both endpoints (local stubs in tests).
    pub fn with_endpoints(
        mut self,
        endpoint: impl Into<String>,
        models_endpoint: impl Into<String>,
    ) -> Self {
        self.endpoint = endpoint.into();
        self.models_endpoint = models_endpoint.into();
        self
    }

    fn credential(&self) -> Result<&Credential, GatewayError> {
        self.credential
            .as_ref()
            .ok_or_else(|| GatewayError::MissingCredential {
                variable: "OPENROUTER_API_KEY".to_string(),
            })
    }
}

#[async_trait]
impl CompletionGateway for OpenRouterGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        let credential = self.credential()?;

        let body = ChatCompletionBody {
            model: request.model.as_str(),
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
        };

        info!(model = %request.model, "sending request to OpenRouter");
        let started = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.reveal())
            .timeout(request.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(e, request.timeout))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, request.timeout))?;

        info!(
            status,
            elapsed_secs = started.elapsed().as_secs_f64(),
            "response received"
        );
        debug!(body_len = text.len(), "response body read");

        parse_completion_body(status, &text)
    }

    async fn available_models(&self) -> Result<Vec<ModelInfo>, GatewayError> {
        let credential = self.credential()?;

        let response = self
            .client
            .get(&self.models_endpoint)
            .bearer_auth(credential.reveal())
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        parse_models_body(status, &text)
    }
}

fn map_transport_error(error: reqwest::Error, timeout: Duration) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout {
            seconds: timeout.as_secs(),
        }
    } else {
        GatewayError::Network(error.to_string())
    }
}

/// Classify a completion response body.
///
/// The order is the contract: non-2xx before parsing, empty before
/// parsing, parse failure before shape failure. A shape failure means the
/// JSON was valid but `choices[0].message.content` was not where this
/// provider puts it.
fn parse_completion_body(status: u16, body: &str) -> Result<Completion, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::Http {
            status,
            body_excerpt: truncate_str(body, BODY_EXCERPT_MAX).to_string(),
        });
    }

    if body.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

    let choices = value
        .get("choices")
        .and_then(serde_json::Value::as_array)
        .filter(|choices| !choices.is_empty())
        .ok_or_else(|| {
            GatewayError::UnexpectedShape("missing or empty 'choices' field".to_string())
        })?;

    let content = choices[0]
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| {
            GatewayError::UnexpectedShape("first choice lacks 'message.content'".to_string())
        })?;

    Ok(Completion {
        text: content.to_string(),
    })
}

/// Classify a model-listing response body (`{"data": [...]}`).
fn parse_models_body(status: u16, body: &str) -> Result<Vec<ModelInfo>, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::Http {
            status,
            body_excerpt: truncate_str(body, BODY_EXCERPT_MAX).to_string(),
        });
    }

    if body.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

    let data = value
        .get("data")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| GatewayError::UnexpectedShape("missing 'data' field".to_string()))?;

    Ok(data
        .iter()
        .map(|model| ModelInfo {
            id: model
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            context_length: model
                .get("context_length")
                .and_then(serde_json::Value::as_u64),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundcraft_domain::Model;

    #[test]
    fn test_non_2xx_is_http_error() {
        let error = parse_completion_body(429, "rate limited").unwrap_err();
        match error {
            GatewayError::Http {
                status,
                body_excerpt,
            } => {
                assert_eq!(status, 429);
                assert_eq!(body_excerpt, "rate limited");
            }
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[test]
    fn test_http_error_excerpt_is_bounded() {
        let body = "x".repeat(5000);
        let error = parse_completion_body(500, &body).unwrap_err();
        match error {
            GatewayError::Http { body_excerpt, .. } => {
                assert_eq!(body_excerpt.len(), BODY_EXCERPT_MAX);
            }
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[test]
    fn test_status_checked_before_body_parse() {
        // A 500 with unparseable garbage must classify as Http, not
        // MalformedResponse.
        let error = parse_completion_body(500, "<html>oops").unwrap_err();
        assert!(matches!(error, GatewayError::Http { status: 500, .. }));
    }

    #[test]
    fn test_empty_body() {
        let error = parse_completion_body(200, "  \n").unwrap_err();
        assert!(matches!(error, GatewayError::EmptyResponse));
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        let error = parse_completion_body(200, r#"{"choices": [{"mess"#).unwrap_err();
        assert!(matches!(error, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_choices_is_unexpected_shape() {
        let error = parse_completion_body(200, r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(error, GatewayError::UnexpectedShape(_)));
    }

    #[test]
    fn test_missing_choices_is_unexpected_shape() {
        let error = parse_completion_body(200, r#"{"id": "gen-1"}"#).unwrap_err();
        assert!(matches!(error, GatewayError::UnexpectedShape(_)));
    }

    #[test]
    fn test_choice_without_content_is_unexpected_shape() {
        let error =
            parse_completion_body(200, r#"{"choices": [{"message": {"role": "assistant"}}]}"#)
                .unwrap_err();
        assert!(matches!(error, GatewayError::UnexpectedShape(_)));
    }

    #[test]
    fn test_content_extracted_unmodified() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "  Dear donor,\n"}}]}"#;
        let completion = parse_completion_body(200, body).unwrap();
        // No trimming, no re-encoding
        assert_eq!(completion.text, "  Dear donor,\n");
    }

    #[test]
    fn test_models_listing_parsed() {
        let body = r#"{"data": [
            {"id": "meta-llama/llama-4-maverick:free", "context_length": 128000},
            {"id": "mistralai/mistral-small"}
        ]}"#;
        let models = parse_models_body(200, body).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "meta-llama/llama-4-maverick:free");
        assert_eq!(models[0].context_length, Some(128_000));
        assert_eq!(models[1].context_length, None);
    }

    #[test]
    fn test_models_listing_without_data_is_unexpected_shape() {
        let error = parse_models_body(200, r#"{"models": []}"#).unwrap_err();
        assert!(matches!(error, GatewayError::UnexpectedShape(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_request() {
        // Endpoint is unroutable: a network attempt would surface as
        // Network, so MissingCredential proves the short circuit.
        let gateway =
            OpenRouterGateway::new(None).with_endpoints("http://127.0.0.1:1", "http://127.0.0.1:1");
        let request = CompletionRequest {
            model: Model::default(),
            prompt: "hello".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(1),
        };

        let error = gateway.complete(&request).await.unwrap_err();
        assert!(matches!(
            error,
            GatewayError::MissingCredential { ref variable } if variable == "OPENROUTER_API_KEY"
        ));

        let error = gateway.available_models().await.unwrap_err();
        assert!(matches!(error, GatewayError::MissingCredential { .. }));
    }
}

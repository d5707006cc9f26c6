//! Gemini gateway adapter
//!
//! Same round trip as the OpenRouter adapter, different wire contract:
//! the request nests the prompt under `contents[].parts[].text`, the key
//! travels in an `x-goog-api-key` header, and the response nests the
//! completion under `candidates[0].content.parts[0].text`.

use crate::credentials::Credential;
use async_trait::async_trait;
use fundcraft_application::{
    BODY_EXCERPT_MAX, Completion, CompletionGateway, CompletionRequest, GatewayError, ModelInfo,
};
use fundcraft_domain::truncate_str;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
struct GenerateContentBody<'a> {
    contents: [Content<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Gateway adapter for the Gemini API.
pub struct GeminiGateway {
    client: reqwest::Client,
    credential: Option<Credential>,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            client: reqwest::Client::new(),
            credential,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Override the API base URL (local stubs in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn credential(&self) -> Result<&Credential, GatewayError> {
        self.credential
            .as_ref()
            .ok_or_else(|| GatewayError::MissingCredential {
                variable: "GEMINI_API_KEY".to_string(),
            })
    }
}

#[async_trait]
impl CompletionGateway for GeminiGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        let credential = self.credential()?;

        let body = GenerateContentBody {
            contents: [Content {
                parts: [Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            request.model.as_str()
        );

        info!(model = %request.model, "sending request to Gemini");
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential.reveal())
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

        parse_generate_content_body(status, &text)
    }

    async fn available_models(&self) -> Result<Vec<ModelInfo>, GatewayError> {
        let credential = self.credential()?;

        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", credential.reveal())
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

/// Classify a generateContent response body. Same ordering contract as
/// the OpenRouter adapter, Gemini field names.
fn parse_generate_content_body(status: u16, body: &str) -> Result<Completion, GatewayError> {
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

    let candidates = value
        .get("candidates")
        .and_then(serde_json::Value::as_array)
        .filter(|candidates| !candidates.is_empty())
        .ok_or_else(|| {
            GatewayError::UnexpectedShape("missing or empty 'candidates' field".to_string())
        })?;

    let text = candidates[0]
        .get("content")
        .and_then(|content| content.get("parts"))
        .and_then(serde_json::Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| {
            GatewayError::UnexpectedShape(
                "first candidate lacks 'content.parts[0].text'".to_string(),
            )
        })?;

    Ok(Completion {
        text: text.to_string(),
    })
}

/// Classify a model-listing response body (`{"models": [...]}`).
///
/// Gemini names models `models/<id>`; the prefix is stripped so the
/// listing prints ids the `--model` flag accepts.
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

    let models = value
        .get("models")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| GatewayError::UnexpectedShape("missing 'models' field".to_string()))?;

    Ok(models
        .iter()
        .map(|model| ModelInfo {
            id: model
                .get("name")
                .and_then(serde_json::Value::as_str)
                .map(|name| name.strip_prefix("models/").unwrap_or(name))
                .unwrap_or("Unknown")
                .to_string(),
            context_length: model
                .get("inputTokenLimit")
                .and_then(serde_json::Value::as_u64),
        })
        .collect())
}

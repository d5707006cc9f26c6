//! Completion Gateway port
//!
//! Defines the interface for communicating with completion providers.
//! One adapter exists per provider wire contract (OpenRouter-style
//! `choices`, Gemini-style `candidates`); which one runs is a wiring
//! decision, never a fork of the tool.

use async_trait::async_trait;
use fundcraft_domain::Model;
use std::time::Duration;
use thiserror::Error;

/// Upper bound, in bytes, on error-payload excerpts carried in
/// [`GatewayError`]. Provider error bodies can be arbitrarily large;
/// error messages must not be.
pub const BODY_EXCERPT_MAX: usize = 200;

/// Errors that can occur during a completion round trip.
///
/// Classification order is a contract: HTTP status is checked before the
/// body is parsed, and the body is parsed before fields are extracted, so
/// a failure always names the earliest-failing stage. None of these are
/// retried; the process fails fast and reports once.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{variable} environment variable is not set. Please set it and try again.")]
    MissingCredential { variable: String },

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {body_excerpt}")]
    Http { status: u16, body_excerpt: String },

    #[error("received an empty response body")]
    EmptyResponse,

    #[error("failed to parse response JSON: {0}")]
    MalformedResponse(String),

    #[error("response has an unexpected shape: {0}")]
    UnexpectedShape(String),
}

/// A single completion request, derived from the campaign request plus
/// [`GenerationParams`](crate::config::GenerationParams). Immutable.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: Model,
    pub prompt: String,
    pub temperature: f32,
    pub timeout: Duration,
}

/// A successful completion: the extracted text, unmodified (no trimming,
/// no re-encoding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

/// One entry of a provider's model listing, for `--list-models`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: String,
    pub context_length: Option<u64>,
}

/// Gateway for completion provider communication
///
/// This port defines how the application layer talks to a provider.
/// Implementations (adapters) live in the infrastructure layer and must:
///
/// - fail with [`GatewayError::MissingCredential`] before any network
///   attempt when no credential was resolved,
/// - perform exactly one request per call (no internal retry),
/// - bound the round trip by `request.timeout`.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one prompt and return the extracted completion text.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError>;

    /// Enumerate the models the provider currently offers.
    async fn available_models(&self) -> Result<Vec<ModelInfo>, GatewayError>;
}

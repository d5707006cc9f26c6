//! Generate Campaign use case.
//!
//! Executes the whole request/response path: validate the campaign request,
//! compose the prompt, call the completion gateway, persist the result.
//!
//! Dry-run short-circuits after composition — no gateway call, no write.

use crate::config::GenerationParams;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::output_sink::{OutputError, OutputSink};
use fundcraft_domain::{CampaignRequest, DomainError, PromptTemplate};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during campaign generation.
#[derive(Error, Debug)]
pub enum GenerateCampaignError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Input for the [`GenerateCampaignUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateCampaignInput {
    /// The campaign to generate copy for.
    pub request: CampaignRequest,
    /// Model, temperature, and timeout for the call.
    pub params: GenerationParams,
    /// Destination file for the generated copy.
    pub output_path: PathBuf,
    /// Compose and return the prompt without calling the provider.
    pub dry_run: bool,
}

/// Result of a campaign generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateCampaignOutcome {
    /// Dry run: the prompt that would have been sent.
    DryRun { prompt: String },
    /// The generated copy, already persisted at `path`.
    Generated { text: String, path: PathBuf },
}

/// Use case for generating campaign copy.
///
/// 1. Validate the request at the boundary
/// 2. Compose the prompt ([`PromptTemplate::campaign`])
/// 3. Dry run? Return the prompt without touching gateway or sink
/// 4. One gateway call, bounded by the configured timeout
/// 5. Persist the text, then hand it back for echoing
pub struct GenerateCampaignUseCase {
    gateway: Arc<dyn CompletionGateway>,
    sink: Arc<dyn OutputSink>,
}

impl GenerateCampaignUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, sink: Arc<dyn OutputSink>) -> Self {
        Self { gateway, sink }
    }

    /// Execute the generation flow.
    pub async fn execute(
        &self,
        input: GenerateCampaignInput,
    ) -> Result<GenerateCampaignOutcome, GenerateCampaignError> {
        input.request.validate()?;

        let prompt = PromptTemplate::campaign(&input.request);
        debug!(prompt_len = prompt.len(), "composed campaign prompt");

        if input.dry_run {
            return Ok(GenerateCampaignOutcome::DryRun { prompt });
        }

        let request = CompletionRequest {
            model: input.params.model.clone(),
            prompt,
            temperature: input.params.temperature,
            timeout: input.params.timeout,
        };

        info!(model = %request.model, "sending completion request");
        let completion = self.gateway.complete(&request).await?;

        self.sink.write(&input.output_path, &completion.text)?;
        info!(path = %input.output_path.display(), "output saved");

        Ok(GenerateCampaignOutcome::Generated {
            text: completion.text,
            path: input.output_path,
        })
    }
}

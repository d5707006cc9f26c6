//! List Models use case.
//!
//! Enumerates the models the configured provider offers, bypassing
//! generation entirely.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError, ModelInfo};
use std::sync::Arc;
use tracing::debug;

/// Use case for listing available provider models.
pub struct ListModelsUseCase {
    gateway: Arc<dyn CompletionGateway>,
}

impl ListModelsUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the provider's model listing.
    pub async fn execute(&self) -> Result<Vec<ModelInfo>, GatewayError> {
        let models = self.gateway.available_models().await?;
        debug!(count = models.len(), "fetched model listing");
        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::{Completion, CompletionRequest};
    use async_trait::async_trait;

    struct FixedGateway(Vec<ModelInfo>);

    #[async_trait]
    impl CompletionGateway for FixedGateway {
        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<Completion, GatewayError> {
            unreachable!("list-models never generates")
        }

        async fn available_models(&self) -> Result<Vec<ModelInfo>, GatewayError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_returns_gateway_listing() {
        let listing = vec![
            ModelInfo {
                id: "meta-llama/llama-4-maverick:free".to_string(),
                context_length: Some(128_000),
            },
            ModelInfo {
                id: "mistralai/mistral-small".to_string(),
                context_length: None,
            },
        ];
        let use_case = ListModelsUseCase::new(Arc::new(FixedGateway(listing.clone())));
        assert_eq!(use_case.execute().await.unwrap(), listing);
    }
}

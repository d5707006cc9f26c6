//! Application layer for fundcraft
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    completion_gateway::{
        Completion, CompletionGateway, CompletionRequest, GatewayError, ModelInfo,
        BODY_EXCERPT_MAX,
    },
    output_sink::{OutputError, OutputSink},
};
pub use use_cases::generate_campaign::{
    GenerateCampaignError, GenerateCampaignInput, GenerateCampaignOutcome,
    GenerateCampaignUseCase,
};
pub use use_cases::list_models::ListModelsUseCase;

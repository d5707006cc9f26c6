//! Infrastructure layer for fundcraft
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the provider gateways, credential resolution, config
//! file loading, and the filesystem output sink.

pub mod config;
pub mod credentials;
pub mod output;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use credentials::{Credential, resolve_credential};
pub use output::FileOutputSink;
pub use providers::{GeminiGateway, OpenRouterGateway, Provider, create_gateway};

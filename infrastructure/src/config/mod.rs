//! Configuration file support
//!
//! - [`file_config`] — raw TOML data types with defaults and validation
//! - [`loader`] — figment-based discovery and merging of config sources

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCampaignConfig, FileConfig, FileCredentialsConfig,
    FileGenerationConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//! CLI flags override anything loaded here.

use fundcraft_domain::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("temperature must be between 0.0 and 1.0 (got {0})")]
    InvalidTemperature(f32),

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,
}

/// Top-level configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider name ("openrouter" or "gemini")
    pub provider: Option<String>,
    pub campaign: FileCampaignConfig,
    pub generation: FileGenerationConfig,
    pub output: FileOutputConfig,
    pub credentials: FileCredentialsConfig,
}

impl FileConfig {
    /// Validate the merged configuration before it is used.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.generation.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(
                self.generation.temperature,
            ));
        }
        if self.generation.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.generation.model.as_str().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }
}

/// Raw campaign defaults from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCampaignConfig {
    /// Default event name
    pub event: String,
    /// Default event date
    pub date: String,
    /// Default copy tone
    pub tone: String,
}

impl Default for FileCampaignConfig {
    fn default() -> Self {
        Self {
            event: "Community Gala".to_string(),
            date: "TBD".to_string(),
            tone: "upbeat".to_string(),
        }
    }
}

/// Raw generation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model identifier (uses domain type)
    pub model: Model,
    /// Sampling temperature
    pub temperature: f32,
    /// Timeout in seconds for the completion call
    pub timeout_seconds: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.7,
            timeout_seconds: 60,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Destination path for generated copy
    pub path: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            path: "out/campaign.md".to_string(),
        }
    }
}

/// Raw credentials configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCredentialsConfig {
    /// Plaintext secret file consulted when the environment variable is
    /// unset. Kept for compatibility with earlier variants; a known weak
    /// practice, not a recommendation.
    pub secret_file: Option<String>,
}

impl Default for FileCredentialsConfig {
    fn default() -> Self {
        Self {
            secret_file: Some(".fundcraft_key".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.campaign.event, "Community Gala");
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.output.path, "out/campaign.md");
    }

    #[test]
    fn test_temperature_out_of_range() {
        let mut config = FileConfig::default();
        config.generation.temperature = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FileConfig::default();
        config.generation.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = FileConfig::default();
        config.generation.model = Model::new("");
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml = r#"
            provider = "gemini"

            [campaign]
            event = "Spring Gala"

            [generation]
            model = "gemini-2.0-flash"
            temperature = 0.3
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.provider.as_deref(), Some("gemini"));
        assert_eq!(config.campaign.event, "Spring Gala");
        // Unspecified fields keep their defaults
        assert_eq!(config.campaign.date, "TBD");
        assert_eq!(config.generation.model.as_str(), "gemini-2.0-flash");
        assert_eq!(config.generation.timeout_seconds, 60);
    }
}

//! Model value object representing a completion model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default model used when neither flag nor config names one.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-maverick:free";

/// A completion model identifier (Value Object)
///
/// Provider model ids are open-ended strings (OpenRouter alone lists
/// hundreds), so this wraps the raw identifier rather than enumerating
/// known models. The default is the free tier model the tool shipped with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(String);

impl Model {
    /// Create a model from its provider identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::new(DEFAULT_MODEL)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::new(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), DEFAULT_MODEL);
    }

    #[test]
    fn test_model_roundtrip() {
        let model: Model = "google/gemini-2.0-flash-001".parse().unwrap();
        assert_eq!(model.to_string(), "google/gemini-2.0-flash-001");
    }

    #[test]
    fn test_model_display_matches_as_str() {
        let model = Model::new("gpt-4.1");
        assert_eq!(model.to_string(), model.as_str());
    }
}

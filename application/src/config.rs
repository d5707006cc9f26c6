//! Generation parameters — one immutable value threaded through the call.
//!
//! Earlier variants of this tool kept the current model in a process-wide
//! mutable default that the `--model` flag overwrote. [`GenerationParams`]
//! replaces that: the model, temperature, and timeout travel explicitly
//! from the CLI into the use case and the gateway.

use fundcraft_domain::Model;
use std::time::Duration;

/// Static parameters for a single completion call.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Model identifier sent to the provider.
    pub model: Model,
    /// Sampling temperature in `[0.0, 1.0]`.
    pub temperature: f32,
    /// Upper bound on the network round trip. No retry happens on expiry;
    /// completion calls are costly and not idempotent in billing.
    pub timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.7,
            timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

//! Configuration types for Groq provider.

use crate::ModelConfig;
use serde::{Deserialize, Serialize};

/// Default Groq API base URL.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Configuration for Groq API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// Groq API key.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default output limit when a request carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "llama-3.3-70b-versatile".to_string(),
            base_url: None,
            max_tokens: None,
        }
    }
}

impl GroqConfig {
    /// Create a new Groq config with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: model.into(), ..Default::default() }
    }

    /// Create a config for llama-3.3-70b-versatile model.
    pub fn llama70b(api_key: impl Into<String>) -> Self {
        Self::new(api_key, "llama-3.3-70b-versatile")
    }

    /// Create a config for llama-3.1-8b-instant model (faster, smaller).
    pub fn llama8b(api_key: impl Into<String>) -> Self {
        Self::new(api_key, "llama-3.1-8b-instant")
    }

    /// Create a config matching a [`ModelConfig`] preset.
    pub fn from_model_config(api_key: impl Into<String>, model: &ModelConfig) -> Self {
        Self::new(api_key, &model.identifier).with_max_tokens(model.max_output_tokens)
    }

    /// Set max tokens for output.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Get the effective base URL.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(GROQ_API_BASE)
    }
}

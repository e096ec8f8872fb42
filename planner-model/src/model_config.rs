//! Generation presets shared across report tasks.

use planner_core::{GenerateContentConfig, PlannerError, Result};
use serde::{Deserialize, Serialize};

/// Model identifier of the small, fast preset.
pub const FAST_MODEL: &str = "llama-3.1-8b-instant";

/// Model identifier of the larger, more capable preset.
pub const VERSATILE_MODEL: &str = "llama-3.3-70b-versatile";

/// Output-length limit applied to every report.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 400;

/// Deterministic generation parameters for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub identifier: String,
    /// In `[0.0, 1.0]`.
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Always false for report generation.
    pub streaming: bool,
}

impl ModelConfig {
    pub fn new(identifier: impl Into<String>, temperature: f32, max_output_tokens: u32) -> Self {
        Self { identifier: identifier.into(), temperature, max_output_tokens, streaming: false }
    }

    /// Small model for list-style reports.
    pub fn fast() -> Self {
        Self::new(FAST_MODEL, 0.5, DEFAULT_MAX_OUTPUT_TOKENS)
    }

    /// Larger model for descriptive reports.
    pub fn versatile() -> Self {
        Self::new(VERSATILE_MODEL, 0.6, DEFAULT_MAX_OUTPUT_TOKENS)
    }

    pub fn generate_config(&self) -> GenerateContentConfig {
        GenerateContentConfig {
            temperature: Some(self.temperature),
            max_output_tokens: Some(self.max_output_tokens as i32),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.identifier.trim().is_empty() {
            return Err(PlannerError::Config("model identifier cannot be empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(PlannerError::Config(format!(
                "temperature {} for '{}' must be within 0.0..=1.0",
                self.temperature, self.identifier
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(PlannerError::Config(format!(
                "max_output_tokens for '{}' must be greater than 0",
                self.identifier
            )));
        }
        if self.streaming {
            return Err(PlannerError::Config(format!(
                "streaming is not supported for '{}'",
                self.identifier
            )));
        }
        Ok(())
    }
}

/// Which of the two presets a task runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Fast,
    Versatile,
}

impl ModelTier {
    pub fn config(self) -> ModelConfig {
        match self {
            ModelTier::Fast => ModelConfig::fast(),
            ModelTier::Versatile => ModelConfig::versatile(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let fast = ModelConfig::fast();
        assert_eq!(fast.identifier, "llama-3.1-8b-instant");
        assert_eq!(fast.temperature, 0.5);
        assert_eq!(fast.max_output_tokens, 400);
        assert!(!fast.streaming);

        let versatile = ModelConfig::versatile();
        assert_eq!(versatile.identifier, "llama-3.3-70b-versatile");
        assert_eq!(versatile.temperature, 0.6);
        assert_eq!(versatile.max_output_tokens, 400);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ModelConfig::fast().validate().is_ok());
        assert!(ModelConfig::versatile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ModelConfig::new("", 0.5, 10).validate().is_err());
        assert!(ModelConfig::new("m", 1.5, 10).validate().is_err());
        assert!(ModelConfig::new("m", -0.1, 10).validate().is_err());
        assert!(ModelConfig::new("m", 0.5, 0).validate().is_err());

        let mut streaming = ModelConfig::fast();
        streaming.streaming = true;
        assert!(streaming.validate().is_err());
    }

    #[test]
    fn test_generate_config() {
        let config = ModelConfig::versatile().generate_config();
        assert_eq!(config.temperature, Some(0.6));
        assert_eq!(config.max_output_tokens, Some(400));
    }

    #[test]
    fn test_tier_config() {
        assert_eq!(ModelTier::Fast.config(), ModelConfig::fast());
        assert_eq!(ModelTier::Versatile.config(), ModelConfig::versatile());
    }
}

//! # planner-model
//!
//! Language model integrations for the study planner.
//!
//! - [`GroqClient`] - Groq-hosted LLaMA models over the chat completions API
//! - [`MockLlm`] - Scripted model for tests
//! - [`ModelConfig`] / [`ModelTier`] - The two generation presets reports run on
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use planner_model::{GroqClient, GroqConfig, ModelConfig};
//!
//! let api_key = std::env::var("GROQ_API_KEY").unwrap();
//! let fast = GroqClient::new(GroqConfig::from_model_config(&api_key, &ModelConfig::fast())).unwrap();
//! ```
//!
//! ## Presets
//!
//! | Tier | Model | Temperature | Max tokens |
//! |------|-------|-------------|------------|
//! | `Fast` | `llama-3.1-8b-instant` | 0.5 | 400 |
//! | `Versatile` | `llama-3.3-70b-versatile` | 0.6 | 400 |

pub mod groq;
pub mod mock;
pub mod model_config;

pub use groq::{GroqClient, GroqConfig};
pub use mock::MockLlm;
pub use model_config::{
    DEFAULT_MAX_OUTPUT_TOKENS, FAST_MODEL, ModelConfig, ModelTier, VERSATILE_MODEL,
};

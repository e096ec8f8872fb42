//! Groq provider.
//!
//! Groq serves LLaMA models behind an OpenAI-compatible chat completions API.
//! The planner uses two of them:
//! - `llama-3.1-8b-instant` for short list-style reports
//! - `llama-3.3-70b-versatile` for descriptive reports
//!
//! # Example
//!
//! ```rust,ignore
//! use planner_model::groq::{GroqClient, GroqConfig};
//!
//! let fast = GroqClient::new(GroqConfig::llama8b(
//!     std::env::var("GROQ_API_KEY").unwrap()
//! ))?;
//! ```

mod client;
mod config;
mod convert;

pub use client::GroqClient;
pub use config::{GROQ_API_BASE, GroqConfig};

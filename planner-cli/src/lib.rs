//! # planner-cli
//!
//! Launcher for the study planner web server.
//!
//! ```bash
//! GROQ_API_KEY=gsk-... study-planner --port 8501
//! ```
//!
//! Configuration is read from `education_support_agent/.env` (or `--env-file`)
//! and the process environment; see [`config::PlannerConfig`].

pub mod cli;
pub mod config;
pub mod serve;

pub use cli::Cli;
pub use config::{ConfigError, PlannerConfig};
pub use serve::{build_pipeline, run_serve};

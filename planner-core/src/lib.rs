//! # planner-core
//!
//! Core traits and types shared by the study planner crates.
//!
//! ## Overview
//!
//! - [`Llm`] - A hosted text-generation model
//! - [`Tool`] - An external capability such as real-time search
//! - [`Agent`] - One report task bound to a model
//! - [`RunContext`] - The immutable per-request input (country, level, stream, timestamp)
//! - [`ReportArtifact`] / [`ReportBundle`] - Report output, single and collected
//! - [`PlannerError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use planner_core::{RunContext, inject_context};
//!
//! let ctx = RunContext::new("Canada", "Masters", "Computer Science");
//! let prompt = inject_context("Universities in {country}", &ctx).unwrap();
//! assert_eq!(prompt, "Universities in Canada");
//! ```

pub mod agent;
pub mod context;
pub mod error;
pub mod instruction_template;
pub mod model;
pub mod report;
pub mod tool;
pub mod types;

pub use agent::Agent;
pub use context::{CONTEXT_KEYS, RunContext, TIMESTAMP_FORMAT};
pub use error::{PlannerError, Result};
pub use instruction_template::inject_context;
pub use model::{
    FinishReason, GenerateContentConfig, Llm, LlmRequest, LlmResponse, LlmResponseStream,
    UsageMetadata,
};
pub use report::{REPORT_EXTENSION, ReportArtifact, ReportBundle, ReportEntry, report_file_name};
pub use tool::Tool;
pub use types::{Content, Part};

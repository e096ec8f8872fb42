//! # planner-agent
//!
//! The five fixed report tasks, the agent that runs one of them against a
//! language model, and the coordinator that fans a request out to all five.
//!
//! ```rust,no_run
//! use planner_agent::{ModelSet, PipelineCoordinator};
//! use planner_artifact::FileArtifactService;
//! use planner_core::RunContext;
//! use planner_model::MockLlm;
//! use std::sync::Arc;
//!
//! # async fn run() -> planner_core::Result<()> {
//! let models = ModelSet::uniform(Arc::new(MockLlm::new("mock").with_text("## Report")));
//! let artifacts = Arc::new(FileArtifactService::new("output"));
//! let pipeline = PipelineCoordinator::standard(models, artifacts, None).build()?;
//!
//! let ctx = Arc::new(RunContext::new("Canada", "Masters", "Data Science"));
//! let outcome = pipeline.run(ctx).await;
//! println!("{:?}", outcome.state());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod pipeline;
mod runner;
mod task;

pub use catalog::{REPORT_NAMES, standard_catalog};
pub use pipeline::{
    FailurePolicy, ModelSet, PipelineBuilder, PipelineCoordinator, PipelineOutcome, PipelineState,
    TaskFailure, catalog_agents,
};
pub use planner_core::Agent;
pub use runner::ReportAgent;
pub use task::{COMPLETE_CONTENT_INSTRUCTION, ReportTaskSpec};

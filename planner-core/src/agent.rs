use crate::{ReportArtifact, Result, RunContext};
use async_trait::async_trait;
use std::sync::Arc;

/// A unit of work that turns a [`RunContext`] into one Markdown report.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Stable report name, e.g. `Universities`.
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    async fn run(&self, ctx: Arc<RunContext>) -> Result<ReportArtifact>;
}

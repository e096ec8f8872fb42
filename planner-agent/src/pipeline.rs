use crate::catalog::standard_catalog;
use crate::runner::ReportAgent;
use futures::future::{join_all, try_join_all};
use planner_artifact::ArtifactService;
use planner_core::{Agent, Llm, PlannerError, ReportBundle, Result, RunContext, Tool};
use planner_model::ModelTier;
use planner_telemetry::{Instrument, pipeline_run_span, record_outcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What happens to the bundle when some tasks fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Any failure fails the run and no bundle is produced.
    #[default]
    AllOrNothing,
    /// Successful reports are kept and failures reported alongside them.
    Isolate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Running,
    Completed,
    /// Only reachable under [`FailurePolicy::Isolate`].
    Partial,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    pub task_name: String,
    pub message: String,
}

#[derive(Debug)]
pub enum PipelineOutcome {
    /// Every task produced its report.
    Completed(ReportBundle),
    Partial { bundle: ReportBundle, failures: Vec<TaskFailure> },
    Failed(PlannerError),
}

impl PipelineOutcome {
    pub fn state(&self) -> PipelineState {
        match self {
            PipelineOutcome::Completed(_) => PipelineState::Completed,
            PipelineOutcome::Partial { .. } => PipelineState::Partial,
            PipelineOutcome::Failed(_) => PipelineState::Failed,
        }
    }

    pub fn bundle(&self) -> Option<&ReportBundle> {
        match self {
            PipelineOutcome::Completed(bundle) | PipelineOutcome::Partial { bundle, .. } => {
                Some(bundle)
            }
            PipelineOutcome::Failed(_) => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PipelineOutcome::Completed(_))
    }

    fn label(&self) -> &'static str {
        match self {
            PipelineOutcome::Completed(_) => "completed",
            PipelineOutcome::Partial { .. } => "partial",
            PipelineOutcome::Failed(_) => "failed",
        }
    }
}

/// One model per tier.
#[derive(Clone)]
pub struct ModelSet {
    pub fast: Arc<dyn Llm>,
    pub versatile: Arc<dyn Llm>,
}

impl ModelSet {
    pub fn new(fast: Arc<dyn Llm>, versatile: Arc<dyn Llm>) -> Self {
        Self { fast, versatile }
    }

    /// Same model for both tiers.
    pub fn uniform(model: Arc<dyn Llm>) -> Self {
        Self { fast: model.clone(), versatile: model }
    }

    pub fn for_tier(&self, tier: ModelTier) -> Arc<dyn Llm> {
        match tier {
            ModelTier::Fast => self.fast.clone(),
            ModelTier::Versatile => self.versatile.clone(),
        }
    }
}

/// Builds one [`ReportAgent`] per catalogue task.
pub fn catalog_agents(
    models: &ModelSet,
    artifacts: Arc<dyn ArtifactService>,
    search: Option<Arc<dyn Tool>>,
) -> Vec<Arc<dyn Agent>> {
    standard_catalog()
        .into_iter()
        .map(|spec| {
            let model = models.for_tier(spec.tier);
            let mut agent = ReportAgent::new(spec, model, artifacts.clone());
            if let Some(tool) = &search {
                agent = agent.with_search(tool.clone());
            }
            Arc::new(agent) as Arc<dyn Agent>
        })
        .collect()
}

/// Fans a [`RunContext`] out to every report agent and gathers the bundle.
///
/// Agents run concurrently. Bundle order follows agent order regardless of
/// completion order.
pub struct PipelineCoordinator {
    plan: RunPlan,
}

impl PipelineCoordinator {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Builder preloaded with the five catalogue agents.
    pub fn standard(
        models: ModelSet,
        artifacts: Arc<dyn ArtifactService>,
        search: Option<Arc<dyn Tool>>,
    ) -> PipelineBuilder {
        let agents = catalog_agents(&models, artifacts.clone(), search);
        PipelineBuilder::default().agents(agents).artifacts(artifacts)
    }

    pub fn agents(&self) -> &[Arc<dyn Agent>] {
        &self.plan.agents
    }

    pub fn policy(&self) -> FailurePolicy {
        self.plan.policy
    }

    /// Runs only when all three inputs are present and non-blank; `None` means idle.
    pub async fn run_inputs(
        &self,
        country: Option<&str>,
        level: Option<&str>,
        stream: Option<&str>,
    ) -> Option<PipelineOutcome> {
        let ctx = RunContext::from_inputs(country, level, stream)?;
        Some(self.run(Arc::new(ctx)).await)
    }

    /// Executes one run on its own task.
    ///
    /// Dropping the returned future (request timeout, client disconnect)
    /// does not cancel the run: it still finishes and discards its run
    /// directory, so no half-written run is left behind. Must be called
    /// from within a tokio runtime.
    pub async fn run(&self, ctx: Arc<RunContext>) -> PipelineOutcome {
        let span = pipeline_run_span(ctx.run_id(), ctx.country());
        let plan = self.plan.clone();
        let handle = tokio::spawn(async move { plan.execute(ctx).await }.instrument(span));

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Pipeline task did not complete");
                PipelineOutcome::Failed(PlannerError::Agent(format!(
                    "pipeline task did not complete: {}",
                    e
                )))
            }
        }
    }
}

/// Everything one run needs, owned so the run can outlive its caller.
#[derive(Clone)]
struct RunPlan {
    agents: Vec<Arc<dyn Agent>>,
    artifacts: Arc<dyn ArtifactService>,
    policy: FailurePolicy,
    keep_artifacts: bool,
}

impl RunPlan {
    async fn execute(&self, ctx: Arc<RunContext>) -> PipelineOutcome {
        tracing::info!(
            state = ?PipelineState::Running,
            tasks = self.agents.len(),
            policy = ?self.policy,
            "Pipeline started"
        );

        let outcome = match self.policy {
            FailurePolicy::AllOrNothing => self.run_all_or_nothing(&ctx).await,
            FailurePolicy::Isolate => self.run_isolated(&ctx).await,
        };

        if !self.keep_artifacts {
            if let Err(e) = self.artifacts.discard(ctx.run_id()).await {
                tracing::warn!(error = %e, "Failed to discard run artifacts");
            }
        }

        record_outcome(outcome.label());
        match &outcome {
            PipelineOutcome::Failed(e) => tracing::error!(error = %e, "Pipeline failed"),
            PipelineOutcome::Partial { failures, .. } => {
                tracing::warn!(failed = failures.len(), "Pipeline finished with failures")
            }
            PipelineOutcome::Completed(_) => tracing::info!("Pipeline completed"),
        }
        outcome
    }

    async fn run_all_or_nothing(&self, ctx: &Arc<RunContext>) -> PipelineOutcome {
        let runs = self.agents.iter().map(|agent| agent.run(ctx.clone()));
        match try_join_all(runs).await {
            Ok(artifacts) => {
                let bundle: ReportBundle = artifacts.into_iter().collect();
                match self.check_complete(&bundle) {
                    Ok(()) => PipelineOutcome::Completed(bundle),
                    Err(e) => PipelineOutcome::Failed(e),
                }
            }
            Err(e) => PipelineOutcome::Failed(e),
        }
    }

    async fn run_isolated(&self, ctx: &Arc<RunContext>) -> PipelineOutcome {
        let runs = self.agents.iter().map(|agent| agent.run(ctx.clone()));
        let results = join_all(runs).await;

        let mut bundle = ReportBundle::new();
        let mut failures = Vec::new();
        for (agent, result) in self.agents.iter().zip(results) {
            match result {
                Ok(artifact) => bundle.insert(artifact.file_name(), artifact.content),
                Err(e) => {
                    tracing::warn!(task.name = agent.name(), error = %e, "Report task failed");
                    failures.push(TaskFailure {
                        task_name: agent.name().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if failures.is_empty() {
            return match self.check_complete(&bundle) {
                Ok(()) => PipelineOutcome::Completed(bundle),
                Err(e) => PipelineOutcome::Failed(e),
            };
        }
        if bundle.is_empty() {
            let names: Vec<_> = failures.iter().map(|f| f.task_name.as_str()).collect();
            return PipelineOutcome::Failed(PlannerError::Agent(format!(
                "all report tasks failed: {}",
                names.join(", ")
            )));
        }
        PipelineOutcome::Partial { bundle, failures }
    }

    /// A completed bundle holds exactly one report per agent.
    fn check_complete(&self, bundle: &ReportBundle) -> Result<()> {
        if bundle.len() != self.agents.len() {
            return Err(PlannerError::Agent(format!(
                "expected {} reports, got {}",
                self.agents.len(),
                bundle.len()
            )));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct PipelineBuilder {
    agents: Vec<Arc<dyn Agent>>,
    artifacts: Option<Arc<dyn ArtifactService>>,
    policy: FailurePolicy,
    keep_artifacts: bool,
}

impl PipelineBuilder {
    pub fn agent(mut self, agent: Arc<dyn Agent>) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn agents(mut self, agents: impl IntoIterator<Item = Arc<dyn Agent>>) -> Self {
        self.agents.extend(agents);
        self
    }

    pub fn artifacts(mut self, artifacts: Arc<dyn ArtifactService>) -> Self {
        self.artifacts = Some(artifacts);
        self
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Keep `<output_dir>/<run_id>/` after the run instead of removing it.
    pub fn keep_artifacts(mut self, keep: bool) -> Self {
        self.keep_artifacts = keep;
        self
    }

    pub fn build(self) -> Result<PipelineCoordinator> {
        let artifacts = self
            .artifacts
            .ok_or_else(|| PlannerError::Config("artifact service is required".to_string()))?;
        if self.agents.is_empty() {
            return Err(PlannerError::Config("pipeline needs at least one agent".to_string()));
        }

        let mut names: Vec<_> = self.agents.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(PlannerError::Config(format!("duplicate report name '{}'", pair[0])));
        }

        Ok(PipelineCoordinator {
            plan: RunPlan {
                agents: self.agents,
                artifacts,
                policy: self.policy,
                keep_artifacts: self.keep_artifacts,
            },
        })
    }
}

use crate::task::ReportTaskSpec;
use async_trait::async_trait;
use futures::StreamExt;
use planner_artifact::{ArtifactService, LoadRequest, SaveRequest};
use planner_core::{Agent, Llm, LlmRequest, ReportArtifact, Result, RunContext, Tool};
use planner_model::ModelConfig;
use planner_telemetry::{Instrument, model_call_span, task_run_span, tool_execute_span};
use serde_json::{Value, json};
use std::sync::Arc;

/// Runs one [`ReportTaskSpec`] against a language model and persists the result.
///
/// The produced Markdown is saved under the run's artifact scope and read back;
/// the read-back content is what the returned [`ReportArtifact`] carries.
pub struct ReportAgent {
    spec: ReportTaskSpec,
    model: Arc<dyn Llm>,
    model_config: ModelConfig,
    search: Option<Arc<dyn Tool>>,
    artifacts: Arc<dyn ArtifactService>,
}

impl std::fmt::Debug for ReportAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportAgent")
            .field("name", &self.spec.name)
            .field("model", &self.model.name())
            .field("model_config", &self.model_config)
            .field("search", &self.search.as_ref().map(|t| t.name().to_string()))
            .finish()
    }
}

impl ReportAgent {
    /// Uses the generation preset of the task's model tier.
    pub fn new(
        spec: ReportTaskSpec,
        model: Arc<dyn Llm>,
        artifacts: Arc<dyn ArtifactService>,
    ) -> Self {
        let model_config = spec.tier.config();
        Self { spec, model, model_config, search: None, artifacts }
    }

    pub fn with_model_config(mut self, model_config: ModelConfig) -> Self {
        self.model_config = model_config;
        self
    }

    /// Search is consulted only when the task is marked search capable.
    pub fn with_search(mut self, tool: Arc<dyn Tool>) -> Self {
        self.search = Some(tool);
        self
    }

    pub fn spec(&self) -> &ReportTaskSpec {
        &self.spec
    }

    pub fn model_config(&self) -> &ModelConfig {
        &self.model_config
    }

    async fn search_reference(&self, ctx: &RunContext) -> Result<Option<String>> {
        let tool = match &self.search {
            Some(tool) if self.spec.search_capable => tool,
            _ => return Ok(None),
        };

        let query = self.spec.render_description(ctx)?;
        let result = tool
            .execute(json!({ "query": query }))
            .instrument(tool_execute_span(tool.name()))
            .await?;

        Ok(format_top_result(&result))
    }

    async fn generate(&self, ctx: &RunContext) -> Result<String> {
        let reference = self.search_reference(ctx).await?;
        let contents = self.spec.contents(ctx, reference.as_deref())?;
        let request = LlmRequest::new(&self.model_config.identifier, contents)
            .with_config(self.model_config.generate_config());

        let span = model_call_span(&self.model_config.identifier);
        async {
            let mut stream = self.model.generate_content(request, false).await?;
            let mut text = String::new();
            while let Some(response) = stream.next().await {
                let response = response?;
                if response.partial {
                    continue;
                }
                if let Some(content) = &response.content {
                    text.push_str(&content.text());
                }
            }
            Ok(text)
        }
        .instrument(span)
        .await
    }
}

/// Renders the first search hit as reference text for the prompt.
fn format_top_result(result: &Value) -> Option<String> {
    let top = result.get("results")?.as_array()?.first()?;
    let field = |name: &str| top.get(name).and_then(Value::as_str).unwrap_or_default();
    Some(format!("{} ({})\n{}", field("title"), field("url"), field("content")))
}

#[async_trait]
impl Agent for ReportAgent {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn description(&self) -> &str {
        &self.spec.role
    }

    async fn run(&self, ctx: Arc<RunContext>) -> Result<ReportArtifact> {
        let span = task_run_span(&self.spec.name, ctx.run_id(), &self.model_config.identifier);
        async {
            let content = self.generate(&ctx).await?;
            if content.trim().is_empty() {
                tracing::warn!("Model returned empty content");
            }

            let file_name = self.spec.file_name();
            self.artifacts
                .save(SaveRequest {
                    run_id: ctx.run_id().to_string(),
                    file_name: file_name.clone(),
                    content,
                })
                .await?;
            let stored = self
                .artifacts
                .load(LoadRequest { run_id: ctx.run_id().to_string(), file_name })
                .await?;

            tracing::info!(bytes = stored.content.len(), "Report written");
            Ok(ReportArtifact::new(&self.spec.name, stored.content))
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_top_result() {
        let value = json!({
            "results": [
                { "title": "CAD", "url": "https://example.com", "content": "1 CAD = 0.73 USD" },
                { "title": "ignored", "url": "", "content": "" }
            ]
        });
        assert_eq!(
            format_top_result(&value).as_deref(),
            Some("CAD (https://example.com)\n1 CAD = 0.73 USD")
        );
        assert_eq!(format_top_result(&json!({ "results": [] })), None);
        assert_eq!(format_top_result(&json!({})), None);
    }
}

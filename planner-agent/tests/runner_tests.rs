use async_trait::async_trait;
use planner_agent::catalog::{airlines, financial, universities};
use planner_agent::{Agent, ReportAgent};
use planner_artifact::{ArtifactService, FileArtifactService, InMemoryArtifactService, LoadRequest};
use planner_core::{PlannerError, Result, RunContext, Tool};
use planner_model::{FAST_MODEL, MockLlm, ModelConfig, VERSATILE_MODEL};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Search stub that records queries and returns a fixed hit.
#[derive(Default)]
struct RecordingSearch {
    queries: Mutex<Vec<String>>,
}

#[async_trait]
impl Tool for RecordingSearch {
    fn name(&self) -> &str {
        "tavily_search_tool"
    }

    fn description(&self) -> &str {
        "records queries"
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let query = args["query"].as_str().unwrap_or_default().to_string();
        self.queries.lock().unwrap().push(query);
        Ok(json!({
            "results": [{ "title": "Air Canada", "url": "https://aircanada.com", "content": "Flag carrier" }]
        }))
    }
}

fn ctx() -> Arc<RunContext> {
    Arc::new(RunContext::new("Canada", "Masters", "Computer Science"))
}

#[tokio::test]
async fn test_request_uses_tier_preset() {
    let model = MockLlm::new("mock").with_text("## Universities");
    let artifacts = Arc::new(InMemoryArtifactService::new());
    let agent = ReportAgent::new(universities(), Arc::new(model.clone()), artifacts);

    let artifact = agent.run(ctx()).await.unwrap();
    assert_eq!(artifact.task_name, "Universities");
    assert_eq!(artifact.content, "## Universities");

    let requests = model.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model, FAST_MODEL);
    let config = request.config.as_ref().unwrap();
    assert_eq!(config.temperature, Some(0.5));
    assert_eq!(config.max_output_tokens, Some(400));

    assert_eq!(request.contents[0].role, "system");
    assert!(request.contents[0].text().starts_with("You are University Finder."));
    assert_eq!(request.contents[1].role, "user");
    assert!(request.contents[1].text().contains("Current Task: List private universities in Canada"));
}

#[tokio::test]
async fn test_versatile_task_uses_versatile_preset() {
    let model = MockLlm::new("mock").with_text("## Estimated Monthly Expenses");
    let agent = ReportAgent::new(
        financial(),
        Arc::new(model.clone()),
        Arc::new(InMemoryArtifactService::new()),
    );
    agent.run(ctx()).await.unwrap();

    let request = &model.requests()[0];
    assert_eq!(request.model, VERSATILE_MODEL);
    assert_eq!(request.config.as_ref().unwrap().temperature, Some(0.6));
}

#[tokio::test]
async fn test_model_config_override() {
    let model = MockLlm::new("mock").with_text("x");
    let agent = ReportAgent::new(
        universities(),
        Arc::new(model.clone()),
        Arc::new(InMemoryArtifactService::new()),
    )
    .with_model_config(ModelConfig::new("custom-model", 0.1, 128));
    agent.run(ctx()).await.unwrap();

    let request = &model.requests()[0];
    assert_eq!(request.model, "custom-model");
    assert_eq!(request.config.as_ref().unwrap().max_output_tokens, Some(128));
}

#[tokio::test]
async fn test_artifact_written_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = Arc::new(FileArtifactService::new(dir.path()));
    let agent = ReportAgent::new(
        universities(),
        Arc::new(MockLlm::new("mock").with_text("- University of Toronto")),
        artifacts.clone(),
    );

    let ctx = ctx();
    let artifact = agent.run(ctx.clone()).await.unwrap();

    let path = dir.path().join(ctx.run_id()).join("Universities.md");
    assert_eq!(std::fs::read_to_string(path).unwrap(), "- University of Toronto");
    let stored = artifacts
        .load(LoadRequest { run_id: ctx.run_id().to_string(), file_name: artifact.file_name() })
        .await
        .unwrap();
    assert_eq!(stored.content, artifact.content);
}

#[tokio::test]
async fn test_model_failure_propagates_and_writes_nothing() {
    let artifacts = Arc::new(InMemoryArtifactService::new());
    let agent = ReportAgent::new(
        universities(),
        Arc::new(MockLlm::failing("mock", "Groq API error (503): unavailable")),
        artifacts.clone(),
    );

    let ctx = ctx();
    let err = agent.run(ctx.clone()).await.unwrap_err();
    assert!(matches!(err, PlannerError::Model(msg) if msg.contains("503")));
    let stored = artifacts
        .load(LoadRequest { run_id: ctx.run_id().to_string(), file_name: "Universities.md".into() })
        .await;
    assert!(matches!(stored, Err(PlannerError::Artifact(_))));
}

#[tokio::test]
async fn test_search_augments_capable_task() {
    let search = Arc::new(RecordingSearch::default());
    let model = MockLlm::new("mock").with_text("## Airlines Flying to Canada");
    let agent = ReportAgent::new(
        airlines(),
        Arc::new(model.clone()),
        Arc::new(InMemoryArtifactService::new()),
    )
    .with_search(search.clone());

    agent.run(ctx()).await.unwrap();

    let queries = search.queries.lock().unwrap().clone();
    assert_eq!(queries.len(), 1);
    assert!(queries[0].starts_with("List airlines flying to Canada as of "));

    let user = model.requests()[0].contents[1].text();
    assert!(user.contains("Air Canada (https://aircanada.com)\nFlag carrier"));
}

#[tokio::test]
async fn test_search_skipped_for_other_tasks() {
    let search = Arc::new(RecordingSearch::default());
    let agent = ReportAgent::new(
        universities(),
        Arc::new(MockLlm::new("mock").with_text("x")),
        Arc::new(InMemoryArtifactService::new()),
    )
    .with_search(search.clone());

    agent.run(ctx()).await.unwrap();
    assert!(search.queries.lock().unwrap().is_empty());
}

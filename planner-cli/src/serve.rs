use crate::config::PlannerConfig;
use anyhow::Result;
use planner_agent::{FailurePolicy, ModelSet, PipelineCoordinator};
use planner_artifact::FileArtifactService;
use planner_core::{Llm, Tool};
use planner_model::{GroqClient, GroqConfig, ModelConfig};
use planner_server::{ServerConfig, create_app};
use planner_tool::{TavilyConfig, TavilySearchTool};
use std::sync::Arc;

fn groq_model(config: &PlannerConfig, preset: &ModelConfig) -> Result<Arc<dyn Llm>> {
    preset.validate()?;
    let mut groq = GroqConfig::from_model_config(&config.groq_api_key, preset);
    if let Some(base_url) = &config.groq_base_url {
        groq = groq.with_base_url(base_url);
    }
    Ok(Arc::new(GroqClient::new(groq)?))
}

fn search_tool(config: &PlannerConfig) -> Result<Option<Arc<dyn Tool>>> {
    if !config.enable_search {
        return Ok(None);
    }
    let api_key = config
        .tavily_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("TAVILY_API_KEY must be set when search is enabled"))?;

    let mut tavily = TavilyConfig::new(api_key);
    if let Some(base_url) = &config.tavily_base_url {
        tavily = tavily.with_base_url(base_url);
    }
    Ok(Some(Arc::new(TavilySearchTool::new(tavily)?)))
}

/// Wires the Groq models, optional search and file artifacts into a pipeline.
pub fn build_pipeline(config: &PlannerConfig) -> Result<PipelineCoordinator> {
    let models = ModelSet::new(
        groq_model(config, &ModelConfig::fast())?,
        groq_model(config, &ModelConfig::versatile())?,
    );
    let artifacts = Arc::new(FileArtifactService::new(&config.output_dir));
    let policy = if config.isolate_failures {
        FailurePolicy::Isolate
    } else {
        FailurePolicy::AllOrNothing
    };

    let pipeline = PipelineCoordinator::standard(models, artifacts, search_tool(config)?)
        .policy(policy)
        .keep_artifacts(config.keep_artifacts)
        .build()?;
    Ok(pipeline)
}

pub async fn run_serve(config: PlannerConfig) -> Result<()> {
    let pipeline = build_pipeline(&config)?;
    let server_config =
        ServerConfig::new(Arc::new(pipeline)).with_request_timeout(config.request_timeout);
    let app = create_app(server_config)?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        address = %addr,
        output_dir = %config.output_dir.display(),
        search = config.enable_search,
        isolate_failures = config.isolate_failures,
        "Study planner listening"
    );
    println!("Study planner starting on http://{}", addr);
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

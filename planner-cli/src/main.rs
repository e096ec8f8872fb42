use anyhow::Result;
use clap::Parser;
use planner_cli::{Cli, PlannerConfig, run_serve};

const SERVICE_NAME: &str = "study-planner";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file_loaded = dotenvy::from_path(&cli.env_file).is_ok();

    let config = cli.apply(PlannerConfig::from_env()?);
    config.validate()?;

    let telemetry = match &config.otlp_endpoint {
        Some(endpoint) => planner_telemetry::init_with_otlp(SERVICE_NAME, endpoint),
        None => planner_telemetry::init_telemetry(SERVICE_NAME),
    };
    if let Err(e) = telemetry {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    if !env_file_loaded {
        tracing::debug!(path = %cli.env_file.display(), "Env file not loaded");
    }

    let result = run_serve(config).await;
    planner_telemetry::shutdown_telemetry();
    result
}

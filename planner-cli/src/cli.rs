use crate::config::{DEFAULT_ENV_FILE, PlannerConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "study-planner")]
#[command(about = "Study abroad planner web server", long_about = None)]
pub struct Cli {
    /// Bind address (overrides PLANNER_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Server port (overrides PLANNER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Env file loaded before reading configuration; a missing file is ignored
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Directory for per-run report files (overrides PLANNER_OUTPUT_DIR)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of environment configuration.
    pub fn apply(&self, mut config: PlannerConfig) -> PlannerConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["study-planner"]).unwrap();
        assert_eq!(cli.env_file, PathBuf::from("education_support_agent/.env"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());

        let config = cli.apply(PlannerConfig::default());
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "study-planner",
            "--host",
            "127.0.0.1",
            "-p",
            "3000",
            "--output-dir",
            "/tmp/out",
            "--env-file",
            ".env.local",
        ])
        .unwrap();

        let config = cli.apply(PlannerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.env_file, PathBuf::from(".env.local"));
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["study-planner", "--port", "99999"]).is_err());
    }
}

//! Runtime configuration loaded from environment variables.
//!
//! Every variable except `GROQ_API_KEY` has a default. `TAVILY_API_KEY` is
//! only required when `PLANNER_ENABLE_SEARCH` is on.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Env file loaded before reading variables; overridable with `--env-file`.
pub const DEFAULT_ENV_FILE: &str = "education_support_agent/.env";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Configuration error naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ConfigError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub groq_api_key: String,
    pub tavily_api_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub output_dir: PathBuf,
    /// Keep `<output_dir>/<run_id>/` after each run.
    pub keep_artifacts: bool,
    pub enable_search: bool,
    /// Render partial results instead of failing the whole run.
    pub isolate_failures: bool,
    pub request_timeout: Duration,
    pub otlp_endpoint: Option<String>,
    pub groq_base_url: Option<String>,
    pub tavily_base_url: Option<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            groq_api_key: String::new(),
            tavily_api_key: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            keep_artifacts: false,
            enable_search: false,
            isolate_failures: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            otlp_endpoint: None,
            groq_base_url: None,
            tavily_base_url: None,
        }
    }
}

impl PlannerConfig {
    /// Reads the process environment. Does not validate; see [`PlannerConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(key) = get("GROQ_API_KEY") {
            config.groq_api_key = key;
        }
        config.tavily_api_key = get("TAVILY_API_KEY");

        if let Some(host) = get("PLANNER_HOST") {
            config.host = host;
        }
        if let Some(port) = get("PLANNER_PORT") {
            config.port = port.parse().map_err(|_| {
                ConfigError::new("PLANNER_PORT", format!("'{}' is not a valid port", port))
            })?;
        }
        if let Some(dir) = get("PLANNER_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(value) = get("PLANNER_KEEP_ARTIFACTS") {
            config.keep_artifacts = parse_bool("PLANNER_KEEP_ARTIFACTS", &value)?;
        }
        if let Some(value) = get("PLANNER_ENABLE_SEARCH") {
            config.enable_search = parse_bool("PLANNER_ENABLE_SEARCH", &value)?;
        }
        if let Some(value) = get("PLANNER_ISOLATE_FAILURES") {
            config.isolate_failures = parse_bool("PLANNER_ISOLATE_FAILURES", &value)?;
        }
        if let Some(value) = get("PLANNER_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = value.parse().map_err(|_| {
                ConfigError::new(
                    "PLANNER_REQUEST_TIMEOUT_SECS",
                    format!("'{}' is not a whole number of seconds", value),
                )
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.otlp_endpoint = get("OTEL_EXPORTER_OTLP_ENDPOINT");
        config.groq_base_url = get("GROQ_BASE_URL");
        config.tavily_base_url = get("TAVILY_BASE_URL");

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groq_api_key.is_empty() {
            return Err(ConfigError::new("GROQ_API_KEY", "must be set"));
        }
        if self.enable_search && self.tavily_api_key.is_none() {
            return Err(ConfigError::new(
                "TAVILY_API_KEY",
                "must be set when PLANNER_ENABLE_SEARCH is enabled",
            ));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::new("PLANNER_HOST", "cannot be empty"));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::new("PLANNER_REQUEST_TIMEOUT_SECS", "must be greater than 0"));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::new(field, format!("'{}' is not a boolean", value))),
    }
}

use planner_agent::PipelineCoordinator;
use std::{sync::Arc, time::Duration};

/// Default overall request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Security configuration for the planner server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 64KB, the form is three fields)
    pub max_body_size: usize,
    /// Request timeout duration (default: 300 seconds)
    pub request_timeout: Duration,
    /// Whether the error banner shows the underlying error message (default: false)
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 64 * 1024,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Permissive CORS and detailed errors.
    pub fn development() -> Self {
        Self { expose_error_details: true, ..Self::default() }
    }
}

/// Configuration for the planner server.
#[derive(Clone)]
pub struct ServerConfig {
    pub pipeline: Arc<PipelineCoordinator>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(pipeline: Arc<PipelineCoordinator>) -> Self {
        Self { pipeline, security: SecurityConfig::default() }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    /// Show underlying error messages in the page banner (for development only)
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.security.expose_error_details = expose;
        self
    }
}

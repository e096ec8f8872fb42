use async_trait::async_trait;
use planner_core::{PlannerError, Result};

#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub run_id: String,
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub run_id: String,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct LoadResponse {
    pub content: String,
}

/// Storage for the markdown documents produced by one pipeline run.
///
/// Every artifact is scoped by `run_id`, so concurrent runs never observe
/// each other's files.
#[async_trait]
pub trait ArtifactService: Send + Sync {
    async fn save(&self, req: SaveRequest) -> Result<()>;
    async fn load(&self, req: LoadRequest) -> Result<LoadResponse>;
    /// Removes every artifact stored for `run_id`. Unknown runs are not an error.
    async fn discard(&self, run_id: &str) -> Result<()>;
}

/// Rejects names that could escape the run scope.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PlannerError::Artifact(format!("invalid artifact {}: empty name", kind)));
    }

    if name.contains('/') || name.contains('\\') || name.contains("..") || name == "." {
        return Err(PlannerError::Artifact(format!(
            "invalid artifact {} '{}': path separators and traversal patterns are not allowed",
            kind, name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("file name", "Universities.md").is_ok());
        assert!(validate_name("file name", "").is_err());
        assert!(validate_name("file name", "../secret.md").is_err());
        assert!(validate_name("file name", "a/b.md").is_err());
        assert!(validate_name("run id", "a\\b").is_err());
        assert!(validate_name("run id", ".").is_err());
    }
}

use crate::service::*;
use async_trait::async_trait;
use planner_core::{PlannerError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Writes artifacts to `<root>/<run_id>/<file_name>`.
#[derive(Debug, Clone)]
pub struct FileArtifactService {
    root: PathBuf,
}

impl FileArtifactService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root.join(run_id)
    }

    fn artifact_path(&self, run_id: &str, file_name: &str) -> Result<PathBuf> {
        validate_name("run id", run_id)?;
        validate_name("file name", file_name)?;
        Ok(self.run_dir(run_id).join(file_name))
    }
}

#[async_trait]
impl ArtifactService for FileArtifactService {
    async fn save(&self, req: SaveRequest) -> Result<()> {
        let path = self.artifact_path(&req.run_id, &req.file_name)?;
        tokio::fs::create_dir_all(self.run_dir(&req.run_id)).await.map_err(|e| {
            PlannerError::Artifact(format!("failed to create run directory: {}", e))
        })?;
        tokio::fs::write(&path, req.content.as_bytes()).await.map_err(|e| {
            PlannerError::Artifact(format!("failed to write {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), bytes = req.content.len(), "Artifact written");
        Ok(())
    }

    async fn load(&self, req: LoadRequest) -> Result<LoadResponse> {
        let path = self.artifact_path(&req.run_id, &req.file_name)?;
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            PlannerError::Artifact(format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(LoadResponse { content })
    }

    async fn discard(&self, run_id: &str) -> Result<()> {
        validate_name("run id", run_id)?;
        match tokio::fs::remove_dir_all(self.run_dir(run_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(PlannerError::Artifact(format!("failed to discard run {}: {}", run_id, e)))
            }
        }
    }
}

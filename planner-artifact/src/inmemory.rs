use crate::service::*;
use async_trait::async_trait;
use planner_core::{PlannerError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

type ArtifactKey = (String, String);

/// Keeps artifacts in process memory. Useful for tests and ephemeral deployments.
#[derive(Clone, Default)]
pub struct InMemoryArtifactService {
    artifacts: Arc<RwLock<BTreeMap<ArtifactKey, String>>>,
}

impl InMemoryArtifactService {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> PlannerError {
        PlannerError::Artifact("artifact store lock poisoned".to_string())
    }
}

#[async_trait]
impl ArtifactService for InMemoryArtifactService {
    async fn save(&self, req: SaveRequest) -> Result<()> {
        validate_name("run id", &req.run_id)?;
        validate_name("file name", &req.file_name)?;

        let mut artifacts = self.artifacts.write().map_err(|_| Self::poisoned())?;
        artifacts.insert((req.run_id, req.file_name), req.content);
        Ok(())
    }

    async fn load(&self, req: LoadRequest) -> Result<LoadResponse> {
        validate_name("run id", &req.run_id)?;
        validate_name("file name", &req.file_name)?;

        let artifacts = self.artifacts.read().map_err(|_| Self::poisoned())?;
        let content = artifacts
            .get(&(req.run_id, req.file_name.clone()))
            .cloned()
            .ok_or_else(|| {
                PlannerError::Artifact(format!("artifact not found: {}", req.file_name))
            })?;

        Ok(LoadResponse { content })
    }

    async fn discard(&self, run_id: &str) -> Result<()> {
        let mut artifacts = self.artifacts.write().map_err(|_| Self::poisoned())?;
        artifacts.retain(|(run, _), _| run != run_id);
        Ok(())
    }
}

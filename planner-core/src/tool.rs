use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// An external capability an agent may call, such as real-time search.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Option<Value> {
        None
    }
    async fn execute(&self, args: Value) -> Result<Value>;
}

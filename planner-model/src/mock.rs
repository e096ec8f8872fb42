use async_trait::async_trait;
use planner_core::{Llm, LlmRequest, LlmResponse, LlmResponseStream, PlannerError, Result};
use std::sync::{Arc, Mutex};

/// Scripted model for tests. Replays its responses on every call and records
/// the requests it received.
#[derive(Clone)]
pub struct MockLlm {
    name: String,
    responses: Vec<LlmResponse>,
    error: Option<String>,
    requests: Arc<Mutex<Vec<LlmRequest>>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: vec![],
            error: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, response: LlmResponse) -> Self {
        self.responses.push(response);
        self
    }

    /// Shorthand for a single complete text response.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_response(LlmResponse::text(text))
    }

    /// Every call fails with a provider error carrying `message`.
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut mock = Self::new(name);
        mock.error = Some(message.into());
        mock
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(&self, req: LlmRequest, _stream: bool) -> Result<LlmResponseStream> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req);
        }

        if let Some(message) = &self.error {
            return Err(PlannerError::Model(message.clone()));
        }

        let responses = self.responses.clone();
        let stream = async_stream::stream! {
            for response in responses {
                yield Ok(response);
            }
        };
        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_mock_llm() {
        let mock = MockLlm::new("test-llm").with_text("hello");
        assert_eq!(mock.name(), "test-llm");
        assert_eq!(mock.responses.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_llm_generate() {
        let mock = MockLlm::new("test").with_text("Hello");

        let req = LlmRequest::new("test", vec![]);
        let mut stream = mock.generate_content(req, false).await.unwrap();

        let response = stream.next().await.unwrap().unwrap();
        assert_eq!(response.content.unwrap().text(), "Hello");
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let mock = MockLlm::failing("test", "rate limit");
        let result = mock.generate_content(LlmRequest::new("test", vec![]), false).await;
        assert!(matches!(result, Err(PlannerError::Model(msg)) if msg == "rate limit"));
        assert_eq!(mock.requests().len(), 1);
    }
}

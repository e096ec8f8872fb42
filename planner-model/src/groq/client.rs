//! Groq client implementation.

use super::config::GroqConfig;
use super::convert::{self, ChatCompletionRequest, ChatCompletionResponse};
use async_stream::try_stream;
use async_trait::async_trait;
use planner_core::{Llm, LlmRequest, LlmResponseStream, PlannerError};
use reqwest::Client;

/// Groq client for LLaMA chat completions.
///
/// Only non-streaming completions are supported; each call yields exactly one
/// [`planner_core::LlmResponse`].
///
/// # Example
///
/// ```rust,ignore
/// use planner_model::groq::{GroqClient, GroqConfig};
///
/// let client = GroqClient::new(GroqConfig::llama8b(
///     std::env::var("GROQ_API_KEY").unwrap()
/// ))?;
/// ```
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Create a new Groq client.
    pub fn new(config: GroqConfig) -> Result<Self, PlannerError> {
        let client = Client::builder()
            .build()
            .map_err(|e| PlannerError::Model(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a client for llama-3.3-70b-versatile model.
    pub fn llama70b(api_key: impl Into<String>) -> Result<Self, PlannerError> {
        Self::new(GroqConfig::llama70b(api_key))
    }

    /// Create a client for llama-3.1-8b-instant model.
    pub fn llama8b(api_key: impl Into<String>) -> Result<Self, PlannerError> {
        Self::new(GroqConfig::llama8b(api_key))
    }

    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Build the API URL for chat completions.
    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url().trim_end_matches('/'))
    }

    /// Build a chat completion request from an LLM request.
    fn build_request(&self, request: &LlmRequest) -> ChatCompletionRequest {
        let messages = request.contents.iter().map(convert::content_to_message).collect();

        let temperature = request.config.as_ref().and_then(|c| c.temperature);
        let max_tokens = request
            .config
            .as_ref()
            .and_then(|c| c.max_output_tokens)
            .map(|t| t as u32)
            .or(self.config.max_tokens);

        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature,
            max_tokens,
            stream: false,
        }
    }
}

#[async_trait]
impl Llm for GroqClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(
        &self,
        request: LlmRequest,
        stream: bool,
    ) -> Result<LlmResponseStream, PlannerError> {
        if stream {
            return Err(PlannerError::Model(
                "Groq client does not support streaming responses".to_string(),
            ));
        }

        let api_url = self.api_url();
        let api_key = self.config.api_key.clone();
        let chat_request = self.build_request(&request);
        let client = self.client.clone();

        tracing::debug!(
            model = %chat_request.model,
            messages = chat_request.messages.len(),
            max_tokens = ?chat_request.max_tokens,
            "Sending Groq chat completion"
        );

        let response_stream = try_stream! {
            let response = client
                .post(&api_url)
                .header("Authorization", format!("Bearer {}", api_key))
                .header("Content-Type", "application/json")
                .json(&chat_request)
                .send()
                .await
                .map_err(|e| PlannerError::Model(format!("Groq API request failed: {}", e)))?;

            let status = response.status();
            let response_text = response
                .text()
                .await
                .map_err(|e| PlannerError::Model(format!("Failed to read response: {}", e)))?;

            if !status.is_success() {
                Err::<(), _>(PlannerError::Model(format!(
                    "Groq API error ({}): {}",
                    status,
                    convert::error_message(&response_text)
                )))?;
            }

            let chat_response: ChatCompletionResponse = serde_json::from_str(&response_text)
                .map_err(|e| PlannerError::Model(format!(
                    "Failed to parse response: {} - {}",
                    e, response_text
                )))?;

            yield convert::from_response(&chat_response);
        };

        Ok(Box::pin(response_stream))
    }
}

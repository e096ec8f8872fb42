//! Type conversion utilities for the Groq (OpenAI-compatible) chat API.

use planner_core::{Content, FinishReason, LlmResponse, Part, UsageMetadata};
use serde::{Deserialize, Serialize};

/// Groq chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Option<String>,
}

/// Groq chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub stream: bool,
}

/// Groq chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<Message>,
    pub finish_reason: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
}

/// Convert planner Content to a Groq Message.
pub fn content_to_message(content: &Content) -> Message {
    let role = match content.role.as_str() {
        "model" | "assistant" => "assistant",
        "system" => "system",
        _ => "user",
    };

    let text = content.text();
    Message { role: role.to_string(), content: if text.is_empty() { None } else { Some(text) } }
}

/// Convert a Groq response to a planner LlmResponse.
pub fn from_response(response: &ChatCompletionResponse) -> LlmResponse {
    let choice = response.choices.first();

    let finish_reason =
        choice.and_then(|c| c.finish_reason.as_deref()).map(FinishReason::from_openai);

    let content = choice
        .and_then(|c| c.message.as_ref())
        .and_then(|m| m.content.as_ref())
        .filter(|text| !text.is_empty())
        .map(|text| Content {
            role: "model".to_string(),
            parts: vec![Part::Text { text: text.clone() }],
        });

    let usage_metadata = response.usage.as_ref().map(|u| UsageMetadata {
        prompt_token_count: u.prompt_tokens as i32,
        candidates_token_count: u.completion_tokens as i32,
        total_token_count: u.total_tokens as i32,
    });

    LlmResponse {
        content,
        usage_metadata,
        finish_reason,
        partial: false,
        turn_complete: true,
        error_code: None,
        error_message: None,
    }
}

/// Extracts a readable message from an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => match parsed.error.error_type {
            Some(kind) => format!("{} ({})", parsed.error.message, kind),
            None => parsed.error.message,
        },
        Err(_) => body.to_string(),
    }
}

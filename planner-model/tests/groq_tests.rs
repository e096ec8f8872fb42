use futures::StreamExt;
use planner_core::{Content, Llm, LlmRequest, PlannerError};
use planner_model::{GroqClient, GroqConfig, ModelConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "llama-3.1-8b-instant",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49 }
    })
}

fn client_for(server: &MockServer, preset: &ModelConfig) -> GroqClient {
    GroqClient::new(GroqConfig::from_model_config("test-key", preset).with_base_url(server.uri()))
        .expect("client")
}

fn report_request(preset: &ModelConfig) -> LlmRequest {
    LlmRequest::new(
        &preset.identifier,
        vec![
            Content::new("system").with_text("You are Airlines Expert."),
            Content::new("user").with_text("List airlines flying to Canada."),
        ],
    )
    .with_config(preset.generate_config())
}

#[tokio::test]
async fn test_request_carries_generation_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instant",
            "temperature": 0.5,
            "max_tokens": 400,
            "stream": false,
            "messages": [
                { "role": "system", "content": "You are Airlines Expert." },
                { "role": "user", "content": "List airlines flying to Canada." }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("- Air Canada")))
        .expect(1)
        .mount(&server)
        .await;

    let preset = ModelConfig::fast();
    let client = client_for(&server, &preset);
    let mut stream = client.generate_content(report_request(&preset), false).await.unwrap();

    let response = stream.next().await.expect("one response").expect("success");
    assert_eq!(response.content.unwrap().text(), "- Air Canada");
    assert_eq!(response.usage_metadata.unwrap().total_token_count, 49);
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_versatile_preset_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "temperature": 0.6
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("## Cultural Fit")))
        .expect(1)
        .mount(&server)
        .await;

    let preset = ModelConfig::versatile();
    let client = client_for(&server, &preset);
    let mut stream = client.generate_content(report_request(&preset), false).await.unwrap();
    let response = stream.next().await.unwrap().unwrap();
    assert_eq!(response.content.unwrap().text(), "## Cultural Fit");
}

#[tokio::test]
async fn test_rate_limit_surfaces_as_model_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit reached for model", "type": "tokens" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let preset = ModelConfig::fast();
    let client = client_for(&server, &preset);
    let mut stream = client.generate_content(report_request(&preset), false).await.unwrap();

    let err = stream.next().await.expect("one item").expect_err("should fail");
    match err {
        PlannerError::Model(msg) => {
            assert!(msg.contains("429"), "{msg}");
            assert!(msg.contains("Rate limit reached"), "{msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_model_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let preset = ModelConfig::fast();
    let client = client_for(&server, &preset);
    let mut stream = client.generate_content(report_request(&preset), false).await.unwrap();

    let err = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(err, PlannerError::Model(msg) if msg.contains("Failed to parse response")));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_model_error() {
    let client = GroqClient::new(GroqConfig::llama8b("k").with_base_url("http://127.0.0.1:1"))
        .expect("client");
    let mut stream =
        client.generate_content(report_request(&ModelConfig::fast()), false).await.unwrap();

    let err = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(err, PlannerError::Model(msg) if msg.contains("request failed")));
}

//! Anthropic Claude: Messages API.
//!
//! `POST {base}/v1/messages` with `x-api-key` and `anthropic-version` headers.
//! The system prompt is a top-level field rather than a message, and the answer
//! is the first `text` block in `content`.
//!
//! Claude has no native JSON mode; `json_mode` is accepted and ignored.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use askllm_core::{AskError, AskRequest, AskResult, ProviderKind};

use crate::http_provider::{secret_header, HttpProvider};
use crate::traits::{LlmClient, WireFormat};

/// Claude client.
pub type ClaudeProvider = HttpProvider<Claude>;

/// Ask Claude using configuration from the environment.
pub async fn ask(request: &AskRequest) -> AskResult<String> {
    ClaudeProvider::from_env().ask(request).await
}

const ANTHROPIC_VERSION: &str = "2023-06-01";
const ANSWER_PATH: &str = "content[0].text";

// ─────────────────────────────────────────────
// Request types
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

// ─────────────────────────────────────────────
// Response types
// ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

// ─────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────

/// Claude request/response schema.
#[derive(Clone, Copy, Debug, Default)]
pub struct Claude;

impl WireFormat for Claude {
    const KIND: ProviderKind = ProviderKind::Claude;
    type Body = MessagesRequest;
    type Response = MessagesResponse;

    fn endpoint(&self, api_base: &str, _model: &str) -> String {
        format!("{}/v1/messages", api_base)
    }

    fn auth_headers(&self, api_key: &str) -> AskResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", secret_header(api_key, Self::KIND.env_key())?);
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        Ok(headers)
    }

    fn build_body(&self, request: &AskRequest, model: &str, max_tokens: u32) -> Self::Body {
        if request.json_mode {
            debug!("Claude has no native JSON mode, ignoring json_mode");
        }

        MessagesRequest {
            model: model.to_string(),
            max_tokens,
            temperature: request.temperature,
            system: request.system().map(String::from),
            messages: vec![ApiMessage {
                role: "user",
                content: request.prompt.clone(),
            }],
        }
    }

    fn extract_text(&self, response: Self::Response) -> AskResult<String> {
        response
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .find_map(|block| block.text)
            .ok_or(AskError::MissingField(ANSWER_PATH))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use askllm_core::config::ProviderConfig;
    use wiremock::matchers::{any, body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(api_key: &str, api_base: &str) -> ClaudeProvider {
        ClaudeProvider::new(ProviderConfig {
            api_key: api_key.to_string(),
            api_base: Some(api_base.to_string()),
            model: None,
        })
    }

    #[test]
    fn test_body_shape() {
        let req = AskRequest::new("hello")
            .with_system("you are terse")
            .with_temperature(0.2);
        let body = serde_json::to_value(Claude.build_body(&req, "claude-x", 4096)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "claude-x",
                "max_tokens": 4096,
                "temperature": 0.2,
                "system": "you are terse",
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn test_json_mode_is_ignored() {
        let plain = serde_json::to_value(Claude.build_body(&AskRequest::new("q"), "m", 1)).unwrap();
        let json = serde_json::to_value(
            Claude.build_body(&AskRequest::new("q").with_json_mode(true), "m", 1),
        )
        .unwrap();
        assert_eq!(plain, json);
    }

    #[test]
    fn test_headers() {
        let provider = provider("sk-ant-1", "https://api.anthropic.com");
        let request = provider.build_request(&AskRequest::new("q")).unwrap();
        assert_eq!(request.url().as_str(), "https://api.anthropic.com/v1/messages");
        assert_eq!(request.headers()["x-api-key"], "sk-ant-1");
        assert_eq!(request.headers()["anthropic-version"], "2023-06-01");
    }

    #[test]
    fn test_extract_skips_non_text_blocks() {
        let response: MessagesResponse = serde_json::from_value(serde_json::json!({
            "content": [
                { "type": "thinking", "thinking": "hmm" },
                { "type": "text", "text": "answer" }
            ]
        }))
        .unwrap();
        assert_eq!(Claude.extract_text(response).unwrap(), "answer");
    }

    #[tokio::test]
    async fn test_ask_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "sk-ant-test"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(serde_json::json!({
                "model": "claude-opus-4-5-20251101",
                "max_tokens": 4096
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "text", "text": "hello world" }],
                "stop_reason": "end_turn"
            })))
            .mount(&mock_server)
            .await;

        let provider = provider("sk-ant-test", &mock_server.uri());
        let text = provider.ask(&AskRequest::new("hi")).await.unwrap();
        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let provider = provider("", &mock_server.uri());
        let err = provider.ask(&AskRequest::new("hi")).await.unwrap_err();
        assert!(matches!(err, AskError::MissingApiKey { var: "ANTHROPIC_API_KEY" }));
    }

    #[tokio::test]
    async fn test_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "type": "error",
                "error": { "type": "api_error", "message": "Internal server error" }
            })))
            .mount(&mock_server)
            .await;

        let provider = provider("sk-ant-test", &mock_server.uri());
        match provider.ask(&AskRequest::new("hi")).await {
            Err(AskError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("Internal server error"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_content_is_missing_field() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": []
            })))
            .mount(&mock_server)
            .await;

        let provider = provider("sk-ant-test", &mock_server.uri());
        let err = provider.ask(&AskRequest::new("hi")).await.unwrap_err();
        assert!(matches!(err, AskError::MissingField(ANSWER_PATH)));
    }
}

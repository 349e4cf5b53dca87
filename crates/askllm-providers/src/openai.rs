//! OpenAI: Chat Completions API.
//!
//! `POST {base}/chat/completions` with bearer auth. The chat message and
//! response types here are shared with the OpenAI-compatible Qwen endpoint.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use askllm_core::{AskError, AskRequest, AskResult, ProviderKind};

use crate::http_provider::{secret_header, HttpProvider};
use crate::traits::{LlmClient, WireFormat};

/// OpenAI client.
pub type OpenAiProvider = HttpProvider<OpenAi>;

/// Ask OpenAI using configuration from the environment.
pub async fn ask(request: &AskRequest) -> AskResult<String> {
    OpenAiProvider::from_env().ask(request).await
}

pub(crate) const ANSWER_PATH: &str = "choices[0].message.content";

// ─────────────────────────────────────────────
// Shared chat-completions types
// ─────────────────────────────────────────────

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// `[system?, user]` messages for a request.
pub(crate) fn chat_messages(request: &AskRequest) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = request.system() {
        messages.push(ChatMessage {
            role: "system",
            content: system.to_string(),
        });
    }
    messages.push(ChatMessage {
        role: "user",
        content: request.prompt.clone(),
    });
    messages
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ResponseFormat {
    pub(crate) fn json_object(enabled: bool) -> Option<Self> {
        enabled.then_some(ResponseFormat {
            kind: "json_object",
        })
    }
}

/// Chat completion response (non-streaming).
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if present.
    pub(crate) fn into_text(self) -> AskResult<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(AskError::MissingField(ANSWER_PATH))
    }
}

/// Bearer auth used by every OpenAI-compatible endpoint.
pub(crate) fn bearer_headers(api_key: &str, env_key: &'static str) -> AskResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, secret_header(&format!("Bearer {}", api_key), env_key)?);
    Ok(headers)
}

// ─────────────────────────────────────────────
// OpenAI wire format
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OpenAiRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// OpenAI request/response schema.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenAi;

impl WireFormat for OpenAi {
    const KIND: ProviderKind = ProviderKind::OpenAi;
    type Body = OpenAiRequest;
    type Response = ChatCompletionResponse;

    fn endpoint(&self, api_base: &str, _model: &str) -> String {
        format!("{}/chat/completions", api_base)
    }

    fn auth_headers(&self, api_key: &str) -> AskResult<HeaderMap> {
        bearer_headers(api_key, Self::KIND.env_key())
    }

    fn build_body(&self, request: &AskRequest, model: &str, max_tokens: u32) -> Self::Body {
        OpenAiRequest {
            model: model.to_string(),
            messages: chat_messages(request),
            temperature: request.temperature,
            max_completion_tokens: max_tokens,
            response_format: ResponseFormat::json_object(request.json_mode),
        }
    }

    fn extract_text(&self, response: Self::Response) -> AskResult<String> {
        response.into_text()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

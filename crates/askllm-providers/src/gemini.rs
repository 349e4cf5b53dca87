//! Google Gemini: `generateContent` REST API.
//!
//! `POST {base}/models/{model}:generateContent`, key in the `x-goog-api-key`
//! header. The answer lives at `candidates[0].content.parts[0].text`.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use askllm_core::{AskError, AskRequest, AskResult, ProviderKind};

use crate::http_provider::{secret_header, HttpProvider};
use crate::traits::{LlmClient, WireFormat};

/// Gemini client.
pub type GeminiProvider = HttpProvider<Gemini>;

/// Ask Gemini using configuration from the environment.
pub async fn ask(request: &AskRequest) -> AskResult<String> {
    GeminiProvider::from_env().ask(request).await
}

const ANSWER_PATH: &str = "candidates[0].content.parts[0].text";

// ─────────────────────────────────────────────
// Request types
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

impl Content {
    fn text(text: &str) -> Self {
        Content {
            parts: vec![TextPart {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

// ─────────────────────────────────────────────
// Response types
// ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// ─────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────

/// Gemini request/response schema.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gemini;

impl WireFormat for Gemini {
    const KIND: ProviderKind = ProviderKind::Gemini;
    type Body = GenerateContentRequest;
    type Response = GenerateContentResponse;

    fn endpoint(&self, api_base: &str, model: &str) -> String {
        // Fully-qualified names ("models/<id>") reduce to the last path segment.
        let model_id = model.rsplit('/').next().unwrap_or(model);
        format!("{}/models/{}:generateContent", api_base, model_id)
    }

    fn auth_headers(&self, api_key: &str) -> AskResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("x-goog-api-key", secret_header(api_key, Self::KIND.env_key())?);
        Ok(headers)
    }

    fn build_body(&self, request: &AskRequest, _model: &str, max_tokens: u32) -> Self::Body {
        GenerateContentRequest {
            contents: vec![Content::text(&request.prompt)],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: max_tokens,
                response_mime_type: request.json_mode.then_some("application/json"),
            },
            system_instruction: request.system().map(Content::text),
        }
    }

    fn extract_text(&self, response: Self::Response) -> AskResult<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .ok_or(AskError::MissingField(ANSWER_PATH))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

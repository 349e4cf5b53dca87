//! Alibaba Qwen: DashScope OpenAI-compatible endpoint.
//!
//! Two entry points share one client:
//! - [`HttpProvider::ask_text`]: one non-streaming call, thinking off
//!   unless requested.
//! - [`HttpProvider::ask_stream`]: SSE streaming into a [`ChunkSink`],
//!   thinking on unless disabled. Reasoning is shown until the answer starts.

use futures_util::{Stream, StreamExt};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use askllm_core::{AskRequest, AskResult, ProviderKind};

use crate::http_provider::{transport_error, HttpProvider, STREAM_TIMEOUT};
use crate::openai::{
    bearer_headers, chat_messages, ChatCompletionResponse, ChatMessage, ResponseFormat,
};
use crate::sink::{ChunkSink, ConsoleSink, StreamChunk};
use crate::stream::{SseDecoder, SseEvent};
use crate::traits::{LlmClient, WireFormat};

/// Qwen client.
pub type QwenProvider = HttpProvider<Qwen>;

/// Non-streaming Qwen call using configuration from the environment.
pub async fn ask_text(request: &AskRequest) -> AskResult<String> {
    QwenProvider::from_env().ask_text(request).await
}

/// Stream a Qwen answer to stdout using configuration from the environment.
pub async fn ask_stream(request: &AskRequest) -> AskResult<()> {
    let mut sink = ConsoleSink::stdout();
    QwenProvider::from_env().ask_stream(request, &mut sink).await
}

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QwenRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    enable_thinking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// One `chat.completion.chunk` payload.
#[derive(Debug, Deserialize)]
struct CompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: Option<Delta>,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    reasoning_content: Option<String>,
}

/// Qwen request/response schema.
#[derive(Clone, Copy, Debug, Default)]
pub struct Qwen;

impl Qwen {
    fn body(&self, request: &AskRequest, model: &str, max_tokens: u32, thinking: bool) -> QwenRequest {
        QwenRequest {
            model: model.to_string(),
            messages: chat_messages(request),
            temperature: request.temperature,
            max_tokens,
            enable_thinking: thinking,
            stream: None,
            response_format: ResponseFormat::json_object(request.json_mode),
        }
    }
}

impl WireFormat for Qwen {
    const KIND: ProviderKind = ProviderKind::Qwen;
    type Body = QwenRequest;
    type Response = ChatCompletionResponse;

    fn endpoint(&self, api_base: &str, _model: &str) -> String {
        format!("{}/chat/completions", api_base)
    }

    fn auth_headers(&self, api_key: &str) -> AskResult<HeaderMap> {
        bearer_headers(api_key, Self::KIND.env_key())
    }

    fn build_body(&self, request: &AskRequest, model: &str, max_tokens: u32) -> Self::Body {
        self.body(request, model, max_tokens, request.enable_thinking.unwrap_or(false))
    }

    fn extract_text(&self, response: Self::Response) -> AskResult<String> {
        response.into_text()
    }
}

// ─────────────────────────────────────────────
// Entry points
// ─────────────────────────────────────────────

impl HttpProvider<Qwen> {
    /// Non-streaming call; thinking defaults to off.
    pub async fn ask_text(&self, request: &AskRequest) -> AskResult<String> {
        self.ask(request).await
    }

    /// Build the streaming HTTP request without sending it.
    pub fn build_stream_request(&self, request: &AskRequest) -> AskResult<reqwest::Request> {
        let api_key = self.preflight(request)?;
        let model = self.model_for(request);
        let mut body = Qwen.body(
            request,
            &model,
            self.max_tokens_for(request),
            request.enable_thinking.unwrap_or(true),
        );
        body.stream = Some(true);
        let url = Qwen.endpoint(self.api_base(), &model);
        self.prepare(&url, api_key, &body, STREAM_TIMEOUT)
    }

    /// Stream the answer into `sink`; thinking defaults to on.
    ///
    /// Chunks are written as they arrive. On failure the error is logged,
    /// anything already written stays written, and the error is returned.
    pub async fn ask_stream(&self, request: &AskRequest, sink: &mut dyn ChunkSink) -> AskResult<()> {
        let thinking = request.enable_thinking.unwrap_or(true);
        let result = self.try_stream(request, thinking, sink).await;
        match &result {
            Ok(()) => debug!(provider = "Qwen", "Stream complete"),
            Err(e) => self.log_failure(e),
        }
        result
    }

    async fn try_stream(
        &self,
        request: &AskRequest,
        thinking: bool,
        sink: &mut dyn ChunkSink,
    ) -> AskResult<()> {
        let http_request = self.build_stream_request(request)?;
        info!(
            provider = "Qwen",
            model = %self.model_for(request),
            thinking,
            "Starting stream"
        );
        let response = self.send(http_request, STREAM_TIMEOUT).await?;

        sink.start(thinking);
        let bytes = response
            .bytes_stream()
            .map(|item| item.map_err(|e| transport_error(e, STREAM_TIMEOUT)));
        let result = pump(bytes, thinking, sink).await;
        sink.finish();
        result
    }
}

// ─────────────────────────────────────────────
// Stream pump
// ─────────────────────────────────────────────

/// Tracks whether the answer has begun, which ends reasoning output.
struct StreamState {
    thinking: bool,
    answering: bool,
}

impl StreamState {
    fn handle(&mut self, data: &str, sink: &mut dyn ChunkSink) {
        let chunk: CompletionChunk = match serde_json::from_str(data) {
            Ok(chunk) => chunk,
            Err(e) => {
                debug!(error = %e, "Skipping malformed stream chunk");
                return;
            }
        };

        let Some(delta) = chunk.choices.into_iter().next().and_then(|c| c.delta) else {
            return;
        };

        if let Some(reasoning) = delta.reasoning_content.filter(|r| !r.is_empty()) {
            if self.thinking && !self.answering {
                sink.write_chunk(&StreamChunk::Reasoning(reasoning));
            }
        }

        if let Some(content) = delta.content.filter(|c| !c.is_empty()) {
            self.answering = true;
            sink.write_chunk(&StreamChunk::Content(content));
        }
    }
}

/// Decode SSE bytes and forward deltas to the sink until `[DONE]`, end of
/// stream, or the first read error.
pub(crate) async fn pump<S, B>(stream: S, thinking: bool, sink: &mut dyn ChunkSink) -> AskResult<()>
where
    S: Stream<Item = AskResult<B>>,
    B: AsRef<[u8]>,
{
    futures_util::pin_mut!(stream);
    let mut decoder = SseDecoder::new();
    let mut state = StreamState {
        thinking,
        answering: false,
    };

    while let Some(item) = stream.next().await {
        let bytes = item?;
        for event in decoder.push(bytes.as_ref()) {
            match event {
                SseEvent::Data(data) => state.handle(&data, sink),
                SseEvent::Done => return Ok(()),
            }
        }
    }

    if let Some(SseEvent::Data(data)) = decoder.finish() {
        state.handle(&data, sink);
    }
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

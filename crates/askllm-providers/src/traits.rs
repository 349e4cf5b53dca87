//! Provider traits: the seams between shared plumbing and per-provider schemas.
//!
//! [`WireFormat`] captures everything that differs between providers (URL,
//! auth headers, body, answer path). [`LlmClient`] is the single capability the
//! CLIs need, so they can be driven by a mock in tests.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use askllm_core::{AskRequest, AskResult, ProviderKind};

/// One provider's HTTP request/response schema.
///
/// Implementations are stateless unit structs; [`crate::HttpProvider`] wraps
/// them with credentials and a client.
pub trait WireFormat: Default + Send + Sync + 'static {
    /// Which provider this schema belongs to.
    const KIND: ProviderKind;

    /// JSON request body.
    type Body: Serialize + Send + Sync;
    /// JSON response body. Should deserialize leniently so that a missing
    /// answer surfaces through [`WireFormat::extract_text`] instead of as a
    /// parse error.
    type Response: DeserializeOwned + Send;

    /// Full endpoint URL for a (resolved) model.
    fn endpoint(&self, api_base: &str, model: &str) -> String;

    /// Authentication headers. The key must travel here, never in the URL.
    fn auth_headers(&self, api_key: &str) -> AskResult<HeaderMap>;

    /// Build the request body.
    fn build_body(&self, request: &AskRequest, model: &str, max_tokens: u32) -> Self::Body;

    /// Pull the answer text out of a parsed response.
    fn extract_text(&self, response: Self::Response) -> AskResult<String>;
}

/// Anything that can answer a prompt with one call.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the prompt and return the answer text.
    ///
    /// Failures are logged by the implementation and returned, never raised.
    async fn ask(&self, request: &AskRequest) -> AskResult<String>;

    /// The model a request would be sent to.
    fn resolve_model(&self, request: &AskRequest) -> String;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}

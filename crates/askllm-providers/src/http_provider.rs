//! Generic HTTP plumbing shared by all providers.
//!
//! `HttpProvider<W>` owns the credentials and the `reqwest` client, and turns a
//! [`WireFormat`] into a working client: key check before any network call,
//! one POST with a fixed timeout, status/parse error mapping, and logging.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use serde::Serialize;
use tracing::{debug, error};

use askllm_core::config::{load_config, ProviderConfig, ProvidersConfig};
use askllm_core::utils::{check_json_answer, truncate_string};
use askllm_core::{AskError, AskRequest, AskResult};

use crate::registry::{self, ProviderSpec};
use crate::traits::{LlmClient, WireFormat};

/// Timeout for every non-streaming call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout for the Qwen streaming call (reasoning plus generation can run long).
pub const STREAM_TIMEOUT: Duration = Duration::from_secs(120);

/// Error bodies are cut to this many characters before being logged.
const ERROR_BODY_LIMIT: usize = 500;

// ─────────────────────────────────────────────
// HttpProvider
// ─────────────────────────────────────────────

/// A provider client: one wire format plus credentials and an HTTP client.
pub struct HttpProvider<W: WireFormat> {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// API key, base URL, and model overrides for this provider.
    config: ProviderConfig,
    /// Built-in defaults from the registry.
    spec: &'static ProviderSpec,
    /// Request/response schema.
    wire: W,
}

impl<W: WireFormat> fmt::Debug for HttpProvider<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpProvider")
            .field("provider", &W::KIND.display_name())
            .field("api_base", &self.api_base())
            .field("config", &self.config)
            .finish()
    }
}

impl<W: WireFormat> HttpProvider<W> {
    /// Create a provider from an explicit config.
    pub fn new(config: ProviderConfig) -> Self {
        HttpProvider {
            client: reqwest::Client::new(),
            config,
            spec: registry::find(W::KIND),
            wire: W::default(),
        }
    }

    /// Pick this provider's section out of a full config.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(config.get(W::KIND).clone())
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_config(&load_config())
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.config
            .api_base
            .as_deref()
            .unwrap_or(self.spec.default_api_base)
            .trim_end_matches('/')
    }

    /// Model for a request: override, then configured default, then built-in.
    pub fn model_for(&self, request: &AskRequest) -> String {
        registry::resolve_model(
            request.model.as_deref(),
            self.config.model.as_deref(),
            self.spec,
        )
    }

    pub(crate) fn max_tokens_for(&self, request: &AskRequest) -> u32 {
        request.max_tokens.unwrap_or(self.spec.default_max_tokens)
    }

    /// Checks that must pass before anything touches the network.
    /// Returns the API key to use.
    pub(crate) fn preflight(&self, request: &AskRequest) -> AskResult<&str> {
        if request.prompt.trim().is_empty() {
            return Err(AskError::EmptyPrompt);
        }
        if !self.config.is_configured() {
            return Err(AskError::MissingApiKey {
                var: W::KIND.env_key(),
            });
        }
        Ok(self.config.api_key.trim())
    }

    /// Build the non-streaming HTTP request without sending it.
    pub fn build_request(&self, request: &AskRequest) -> AskResult<reqwest::Request> {
        let api_key = self.preflight(request)?;
        let model = self.model_for(request);
        let body = self
            .wire
            .build_body(request, &model, self.max_tokens_for(request));
        let url = self.wire.endpoint(self.api_base(), &model);
        self.prepare(&url, api_key, &body, REQUEST_TIMEOUT)
    }

    /// Assemble a POST with auth headers, JSON body, and a per-request timeout.
    pub(crate) fn prepare<B: Serialize + ?Sized>(
        &self,
        url: &str,
        api_key: &str,
        body: &B,
        timeout: Duration,
    ) -> AskResult<reqwest::Request> {
        let headers = self.wire.auth_headers(api_key)?;
        self.client
            .post(url)
            .headers(headers)
            .timeout(timeout)
            .json(body)
            .build()
            .map_err(|e| AskError::Transport(format!("failed to build request: {}", e)))
    }

    /// Send a prepared request and reject non-success statuses.
    pub(crate) async fn send(
        &self,
        request: reqwest::Request,
        timeout: Duration,
    ) -> AskResult<reqwest::Response> {
        debug!(
            provider = W::KIND.display_name(),
            url = %request.url(),
            "Calling LLM"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(AskError::Status {
                status: status.as_u16(),
                body: truncate_string(&body, ERROR_BODY_LIMIT),
            });
        }

        Ok(response)
    }

    async fn try_ask(&self, request: &AskRequest) -> AskResult<String> {
        let http_request = self.build_request(request)?;
        let response = self.send(http_request, REQUEST_TIMEOUT).await?;
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, REQUEST_TIMEOUT))?;

        let parsed: W::Response = serde_json::from_str(&body)?;
        let text = self.wire.extract_text(parsed)?;

        if request.json_mode {
            check_json_answer(&text, W::KIND.display_name());
        }
        Ok(text)
    }

    /// Log a failed call with its kind and detail.
    pub(crate) fn log_failure(&self, err: &AskError) {
        error!(
            provider = W::KIND.display_name(),
            kind = err.kind(),
            error = %err,
            "LLM call failed"
        );
    }
}

#[async_trait]
impl<W: WireFormat> LlmClient for HttpProvider<W> {
    async fn ask(&self, request: &AskRequest) -> AskResult<String> {
        let result = self.try_ask(request).await;
        match &result {
            Ok(text) => debug!(
                provider = W::KIND.display_name(),
                chars = text.len(),
                "LLM response received"
            ),
            Err(e) => self.log_failure(e),
        }
        result
    }

    fn resolve_model(&self, request: &AskRequest) -> String {
        self.model_for(request)
    }

    fn display_name(&self) -> &str {
        W::KIND.display_name()
    }
}

/// Turn an API key into a header value that `reqwest` keeps out of debug output.
pub(crate) fn secret_header(value: &str, var: &'static str) -> AskResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| AskError::InvalidHeader(var))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Map a `reqwest` failure onto the error taxonomy.
pub(crate) fn transport_error(e: reqwest::Error, timeout: Duration) -> AskError {
    if e.is_timeout() {
        AskError::Timeout {
            secs: timeout.as_secs(),
        }
    } else {
        AskError::Transport(e.to_string())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! Core types for askllm: the provider-neutral request and provider identifiers.
//!
//! Every provider client accepts the same [`AskRequest`]; the provider modules
//! translate it into their own wire format.

use std::fmt;

/// Default sampling temperature when the caller does not pick one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// The hosted LLM providers askllm knows how to talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Gemini,
    Claude,
    OpenAi,
    Qwen,
}

impl ProviderKind {
    /// All providers, in a stable order.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Gemini,
        ProviderKind::Claude,
        ProviderKind::OpenAi,
        ProviderKind::Qwen,
    ];

    /// Lowercase internal name (e.g. `"openai"`).
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Claude => "claude",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Qwen => "qwen",
        }
    }

    /// Human-readable name for logs.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Claude => "Claude",
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Qwen => "Qwen",
        }
    }

    /// Environment variable holding the API key.
    pub fn env_key(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Claude => "ANTHROPIC_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Qwen => "DASHSCOPE_API_KEY",
        }
    }

    /// Environment variable holding the default model, if the provider has one.
    pub fn env_model(self) -> Option<&'static str> {
        match self {
            ProviderKind::Gemini => Some("GEMINI_MODEL"),
            ProviderKind::Claude => Some("CLAUDE_MODEL"),
            ProviderKind::OpenAi => Some("OPENAI_MODEL"),
            ProviderKind::Qwen => None,
        }
    }

    /// Environment variable that overrides the API base URL.
    pub fn env_api_base(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_BASE",
            ProviderKind::Claude => "ANTHROPIC_API_BASE",
            ProviderKind::OpenAi => "OPENAI_API_BASE",
            ProviderKind::Qwen => "DASHSCOPE_API_BASE",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ─────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────

/// A single prompt to send to a provider.
///
/// `None` fields fall back to provider defaults: the model resolves through
/// the configured default and then the built-in one, `max_tokens` to the
/// provider's own limit, and `enable_thinking` to whatever the Qwen entry point
/// prefers (off for text, on for streaming).
#[derive(Clone, Debug, PartialEq)]
pub struct AskRequest {
    /// The user's input.
    pub prompt: String,
    /// Optional system context/persona.
    pub system_instruction: Option<String>,
    /// Model override.
    pub model: Option<String>,
    /// Sampling temperature, forwarded verbatim.
    pub temperature: f64,
    /// Maximum output tokens.
    pub max_tokens: Option<u32>,
    /// Ask for a JSON answer where the provider supports it.
    pub json_mode: bool,
    /// Qwen only: request reasoning tokens.
    pub enable_thinking: Option<bool>,
}

impl AskRequest {
    /// Create a request with defaults for everything but the prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        AskRequest {
            prompt: prompt.into(),
            system_instruction: None,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            json_mode: false,
            enable_thinking: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system_instruction = Some(system.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    pub fn with_thinking(mut self, enable: bool) -> Self {
        self.enable_thinking = Some(enable);
        self
    }

    /// The system instruction, treating an empty string as absent.
    pub fn system(&self) -> Option<&str> {
        self.system_instruction
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = AskRequest::new("hi");
        assert_eq!(req.prompt, "hi");
        assert_eq!(req.temperature, 0.7);
        assert!(req.model.is_none());
        assert!(req.max_tokens.is_none());
        assert!(!req.json_mode);
        assert!(req.enable_thinking.is_none());
    }

    #[test]
    fn test_request_builders() {
        let req = AskRequest::new("hi")
            .with_system("be brief")
            .with_model("m")
            .with_temperature(1.5)
            .with_max_tokens(10)
            .with_json_mode(true)
            .with_thinking(true);
        assert_eq!(req.system(), Some("be brief"));
        assert_eq!(req.model.as_deref(), Some("m"));
        assert_eq!(req.temperature, 1.5);
        assert_eq!(req.max_tokens, Some(10));
        assert!(req.json_mode);
        assert_eq!(req.enable_thinking, Some(true));
    }

    #[test]
    fn test_empty_system_is_absent() {
        let req = AskRequest::new("hi").with_system("");
        assert_eq!(req.system(), None);
    }

    #[test]
    fn test_env_names() {
        assert_eq!(ProviderKind::Gemini.env_key(), "GEMINI_API_KEY");
        assert_eq!(ProviderKind::Claude.env_key(), "ANTHROPIC_API_KEY");
        assert_eq!(ProviderKind::Claude.env_model(), Some("CLAUDE_MODEL"));
        assert_eq!(ProviderKind::Qwen.env_key(), "DASHSCOPE_API_KEY");
        assert_eq!(ProviderKind::Qwen.env_model(), None);
    }

    #[test]
    fn test_provider_kind_display() {
        assert_eq!(ProviderKind::OpenAi.to_string(), "OpenAI");
        assert_eq!(ProviderKind::Qwen.to_string(), "Qwen");
    }
}

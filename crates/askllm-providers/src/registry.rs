//! Provider registry: static specs for the four supported providers.
//!
//! Each `ProviderSpec` holds the built-in defaults used when neither the
//! request nor the environment says otherwise.

use askllm_core::ProviderKind;

// ─────────────────────────────────────────────
// ProviderSpec: static metadata for one provider
// ─────────────────────────────────────────────

/// Static specification describing one provider's defaults.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    /// Which provider this describes.
    pub kind: ProviderKind,
    /// Model used when neither the request nor the environment names one.
    pub default_model: &'static str,
    /// API base URL used when no override is configured.
    pub default_api_base: &'static str,
    /// Output token limit used when the request does not set one.
    pub default_max_tokens: u32,
}

/// All supported providers.
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        kind: ProviderKind::Gemini,
        default_model: "gemini-2.5-pro-preview",
        default_api_base: "https://generativelanguage.googleapis.com/v1beta",
        default_max_tokens: 8192,
    },
    ProviderSpec {
        kind: ProviderKind::Claude,
        default_model: "claude-opus-4-5-20251101",
        default_api_base: "https://api.anthropic.com",
        default_max_tokens: 4096,
    },
    ProviderSpec {
        kind: ProviderKind::OpenAi,
        default_model: "gpt-5.2-2025-12-11",
        default_api_base: "https://api.openai.com/v1",
        default_max_tokens: 4096,
    },
    ProviderSpec {
        kind: ProviderKind::Qwen,
        default_model: "qwen3-max-2026-01-23",
        default_api_base: "https://dashscope-intl.aliyuncs.com/compatible-mode/v1",
        default_max_tokens: 8192,
    },
];

/// Look up the spec for a provider.
pub fn find(kind: ProviderKind) -> &'static ProviderSpec {
    // PROVIDERS is ordered like ProviderKind::ALL.
    match kind {
        ProviderKind::Gemini => &PROVIDERS[0],
        ProviderKind::Claude => &PROVIDERS[1],
        ProviderKind::OpenAi => &PROVIDERS[2],
        ProviderKind::Qwen => &PROVIDERS[3],
    }
}

/// Pick the model for a call: explicit override, then configured default,
/// then the built-in one. Blank values are skipped.
pub fn resolve_model(
    requested: Option<&str>,
    configured: Option<&str>,
    spec: &ProviderSpec,
) -> String {
    requested
        .filter(|m| !m.trim().is_empty())
        .or_else(|| configured.filter(|m| !m.trim().is_empty()))
        .unwrap_or(spec.default_model)
        .to_string()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

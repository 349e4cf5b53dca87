//! Config loader: resolves every provider's settings from environment variables.
//!
//! # Variables
//! - `<KEY_VAR>` → `api_key` (e.g. `GEMINI_API_KEY`, `ANTHROPIC_API_KEY`)
//! - `<MODEL_VAR>` → `model` (e.g. `GEMINI_MODEL`, `CLAUDE_MODEL`; Qwen has none)
//! - `<BASE_VAR>` → `api_base` (e.g. `OPENAI_API_BASE`)
//!
//! Empty values are treated as unset.

use tracing::debug;

use super::schema::{ProviderConfig, ProvidersConfig};
use crate::types::ProviderKind;

/// Load configuration from the process environment.
pub fn load_config() -> ProvidersConfig {
    load_config_with(|name| std::env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Tests pass a map here instead of touching the real environment.
pub fn load_config_with<F>(lookup: F) -> ProvidersConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ProvidersConfig::default();
    for kind in ProviderKind::ALL {
        *config.get_mut(kind) = load_provider(kind, &lookup);
    }
    config
}

/// Resolve one provider's settings.
fn load_provider<F>(kind: ProviderKind, lookup: &F) -> ProviderConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let config = ProviderConfig {
        api_key: non_empty(kind.env_key()).unwrap_or_default(),
        api_base: non_empty(kind.env_api_base()),
        model: kind.env_model().and_then(non_empty),
    };

    debug!(
        provider = kind.name(),
        configured = config.is_configured(),
        model = config.model.as_deref().unwrap_or("default"),
        api_base = config.api_base.as_deref().unwrap_or("default"),
        "Resolved provider config"
    );

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> ProvidersConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_with(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_empty_environment() {
        let config = load_from(&[]);
        for kind in ProviderKind::ALL {
            assert!(!config.get(kind).is_configured());
            assert!(config.get(kind).model.is_none());
            assert!(config.get(kind).api_base.is_none());
        }
    }

    #[test]
    fn test_keys_and_models() {
        let config = load_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("ANTHROPIC_API_KEY", "sk-ant"),
            ("CLAUDE_MODEL", "claude-sonnet-4"),
            ("OPENAI_API_KEY", "sk-oa"),
            ("DASHSCOPE_API_KEY", "sk-ds"),
        ]);
        assert_eq!(config.gemini.api_key, "g-key");
        assert_eq!(config.gemini.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(config.claude.api_key, "sk-ant");
        assert_eq!(config.claude.model.as_deref(), Some("claude-sonnet-4"));
        assert_eq!(config.openai.api_key, "sk-oa");
        assert!(config.openai.model.is_none());
        assert_eq!(config.qwen.api_key, "sk-ds");
    }

    #[test]
    fn test_qwen_has_no_model_variable() {
        let config = load_from(&[("DASHSCOPE_API_KEY", "k"), ("QWEN_MODEL", "qwen-plus")]);
        assert!(config.qwen.model.is_none());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = load_from(&[("OPENAI_API_KEY", "  "), ("OPENAI_MODEL", "")]);
        assert!(!config.openai.is_configured());
        assert!(config.openai.model.is_none());
    }

    #[test]
    fn test_api_base_override() {
        let config = load_from(&[("ANTHROPIC_API_BASE", "http://localhost:8080")]);
        assert_eq!(
            config.claude.api_base.as_deref(),
            Some("http://localhost:8080")
        );
    }
}

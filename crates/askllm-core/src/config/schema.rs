//! Configuration schema: one [`ProviderConfig`] per supported provider.

use std::fmt;

use crate::types::ProviderKind;

// ─────────────────────────────────────────────
// Single provider
// ─────────────────────────────────────────────

/// Credentials and overrides for a single provider.
#[derive(Clone, Default, PartialEq)]
pub struct ProviderConfig {
    /// API key for authentication (empty when unset).
    pub api_key: String,
    /// Custom API base URL (overrides the provider default).
    pub api_base: Option<String>,
    /// Default model (overrides the built-in default).
    pub model: Option<String>,
}

impl ProviderConfig {
    /// Create a config holding only an API key.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        ProviderConfig {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Whether this provider has a usable API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &if self.is_configured() { "<set>" } else { "<unset>" })
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

// ─────────────────────────────────────────────
// All providers
// ─────────────────────────────────────────────

/// Configuration for every provider, built once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProvidersConfig {
    pub gemini: ProviderConfig,
    pub claude: ProviderConfig,
    pub openai: ProviderConfig,
    pub qwen: ProviderConfig,
}

impl ProvidersConfig {
    /// Get the config for one provider.
    pub fn get(&self, kind: ProviderKind) -> &ProviderConfig {
        match kind {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::Claude => &self.claude,
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Qwen => &self.qwen,
        }
    }

    /// Mutable access to the config for one provider.
    pub fn get_mut(&mut self, kind: ProviderKind) -> &mut ProviderConfig {
        match kind {
            ProviderKind::Gemini => &mut self.gemini,
            ProviderKind::Claude => &mut self.claude,
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::Qwen => &mut self.qwen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configured() {
        assert!(!ProviderConfig::default().is_configured());
        assert!(!ProviderConfig::with_key("   ").is_configured());
        assert!(ProviderConfig::with_key("sk-123").is_configured());
    }

    #[test]
    fn test_debug_hides_key() {
        let cfg = ProviderConfig::with_key("sk-secret");
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<set>"));
    }

    #[test]
    fn test_get_by_kind() {
        let mut cfg = ProvidersConfig::default();
        cfg.get_mut(ProviderKind::OpenAi).api_key = "sk-openai".into();
        assert!(cfg.get(ProviderKind::OpenAi).is_configured());
        assert!(!cfg.get(ProviderKind::Gemini).is_configured());
    }
}

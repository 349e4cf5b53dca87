//! Configuration system: per-provider schema and environment loading.
//!
//! # Usage
//! ```no_run
//! use askllm_core::config;
//! use askllm_core::ProviderKind;
//!
//! let cfg = config::load_config();
//! println!("Gemini configured: {}", cfg.get(ProviderKind::Gemini).is_configured());
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{load_config, load_config_with};
pub use schema::{ProviderConfig, ProvidersConfig};

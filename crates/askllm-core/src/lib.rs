//! Core building blocks shared by every askllm crate.
//!
//! - [`types`]: the provider-neutral request shape and provider identifiers
//! - [`error`]: the failure taxonomy returned by every client
//! - [`config`]: environment-driven provider configuration
//! - [`utils`]: small string helpers used in logging and JSON-mode checks

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use error::{AskError, AskResult};
pub use types::{AskRequest, ProviderKind};

//! Shared plumbing for the `ask-*` binaries.
//!
//! # Binaries
//!
//! - `ask-gemini`, `ask-claude`, `ask-openai`: one question, answer on stdout
//! - `ask-qwen`: streams thinking and answer; interactive when given no words

pub mod args;
pub mod helpers;
pub mod prompt;
pub mod run;

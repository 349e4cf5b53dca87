//! LLM provider layer for askllm.
//!
//! Each provider talks to its own HTTPS JSON API directly through `reqwest`.
//!
//! # Architecture
//!
//! - [`traits::WireFormat`]: per-provider request/response schema
//! - [`traits::LlmClient`]: the one-call "ask" capability the CLIs depend on
//! - [`registry`]: static specs (default model, base URL, token limit)
//! - [`http_provider::HttpProvider`]: shared plumbing: key check, send, error mapping
//! - [`gemini`], [`claude`], [`openai`], [`qwen`]: the four wire formats
//! - [`stream`] + [`sink`]: SSE decoding and chunk output for Qwen streaming

pub mod claude;
pub mod gemini;
pub mod http_provider;
pub mod openai;
pub mod qwen;
pub mod registry;
pub mod sink;
pub mod stream;
pub mod traits;

// Re-export main types for convenience
pub use claude::ClaudeProvider;
pub use gemini::GeminiProvider;
pub use http_provider::{HttpProvider, REQUEST_TIMEOUT, STREAM_TIMEOUT};
pub use openai::OpenAiProvider;
pub use qwen::QwenProvider;
pub use registry::{ProviderSpec, PROVIDERS};
pub use sink::{ChunkSink, ConsoleSink, MemorySink, StreamChunk};
pub use traits::{LlmClient, WireFormat};

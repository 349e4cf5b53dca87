//! Streaming output sinks.
//!
//! The Qwen stream hands every decoded delta to a [`ChunkSink`] as soon as it
//! arrives. [`ConsoleSink`] renders it for a terminal; [`MemorySink`] records
//! it for tests.

use std::io::{self, Write};

/// One piece of streamed output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamChunk {
    /// Model reasoning ("thinking") text.
    Reasoning(String),
    /// Answer text.
    Content(String),
}

/// Destination for streamed chunks.
pub trait ChunkSink: Send {
    /// Called once before the first chunk.
    fn start(&mut self, _thinking: bool) {}

    /// Called for each chunk, in arrival order.
    fn write_chunk(&mut self, chunk: &StreamChunk);

    /// Called exactly once when the stream ends, successfully or not.
    fn finish(&mut self);
}

// ─────────────────────────────────────────────
// ConsoleSink
// ─────────────────────────────────────────────

const RULE: &str = "====================";

/// Writes chunks to a terminal with section headers, flushing per chunk.
///
/// Write errors (e.g. a closed pipe) are ignored; the stream keeps draining.
pub struct ConsoleSink<W: Write + Send> {
    out: W,
    answering: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleSink::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink {
            out,
            answering: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write + Send> ChunkSink for ConsoleSink<W> {
    fn start(&mut self, thinking: bool) {
        if thinking {
            self.emit(&format!("\n{} Thinking process {}\n", RULE, RULE));
        }
    }

    fn write_chunk(&mut self, chunk: &StreamChunk) {
        match chunk {
            StreamChunk::Reasoning(text) => self.emit(text),
            StreamChunk::Content(text) => {
                if !self.answering {
                    self.answering = true;
                    self.emit(&format!("\n{} Response {}\n", RULE, RULE));
                }
                self.emit(text);
            }
        }
    }

    fn finish(&mut self) {
        self.emit("\n\n");
    }
}

// ─────────────────────────────────────────────
// MemorySink
// ─────────────────────────────────────────────

/// Records everything it is given.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub chunks: Vec<StreamChunk>,
    pub started: Option<bool>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenated answer text.
    pub fn content(&self) -> String {
        self.chunks
            .iter()
            .filter_map(|c| match c {
                StreamChunk::Content(text) => Some(text.as_str()),
                StreamChunk::Reasoning(_) => None,
            })
            .collect()
    }

    /// Concatenated reasoning text.
    pub fn reasoning(&self) -> String {
        self.chunks
            .iter()
            .filter_map(|c| match c {
                StreamChunk::Reasoning(text) => Some(text.as_str()),
                StreamChunk::Content(_) => None,
            })
            .collect()
    }
}

impl ChunkSink for MemorySink {
    fn start(&mut self, thinking: bool) {
        self.started = Some(thinking);
    }

    fn write_chunk(&mut self, chunk: &StreamChunk) {
        self.chunks.push(chunk.clone());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(thinking: bool, chunks: &[StreamChunk]) -> String {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.start(thinking);
        for chunk in chunks {
            sink.write_chunk(chunk);
        }
        sink.finish();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_console_with_thinking() {
        let out = render(
            true,
            &[
                StreamChunk::Reasoning("let me see".into()),
                StreamChunk::Content("4".into()),
                StreamChunk::Content("2".into()),
            ],
        );
        assert_eq!(
            out,
            "\n==================== Thinking process ====================\n\
             let me see\n==================== Response ====================\n42\n\n"
        );
    }

    #[test]
    fn test_console_without_thinking_has_no_thinking_header() {
        let out = render(false, &[StreamChunk::Content("hi".into())]);
        assert!(!out.contains("Thinking process"));
        assert!(out.starts_with("\n==================== Response"));
        assert!(out.ends_with("hi\n\n"));
    }

    #[test]
    fn test_console_response_header_printed_once() {
        let out = render(
            false,
            &[
                StreamChunk::Content("a".into()),
                StreamChunk::Content("b".into()),
            ],
        );
        assert_eq!(out.matches("Response").count(), 1);
    }

    #[test]
    fn test_memory_sink_records_order() {
        let mut sink = MemorySink::new();
        sink.start(true);
        sink.write_chunk(&StreamChunk::Reasoning("r".into()));
        sink.write_chunk(&StreamChunk::Content("x".into()));
        sink.write_chunk(&StreamChunk::Content("y".into()));
        sink.finish();

        assert_eq!(sink.started, Some(true));
        assert!(sink.finished);
        assert_eq!(sink.content(), "xy");
        assert_eq!(sink.reasoning(), "r");
        assert_eq!(sink.chunks[1], StreamChunk::Content("x".into()));
    }
}

//! Interactive question prompt for `ask-qwen`.
//!
//! Uses `rustyline` for readline-style editing. One question is read; there is
//! no loop and no history.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::helpers;

pub const QUESTION_PROMPT: &str = "Your question: ";

/// Read one question from the terminal.
///
/// Returns `None` when the user enters nothing or presses Ctrl-C / Ctrl-D.
pub fn read_question(provider: &str) -> Result<Option<String>> {
    helpers::print_interactive_header(provider);

    let mut editor = DefaultEditor::new()?;
    match editor.readline(QUESTION_PROMPT) {
        Ok(line) => {
            let question = normalize(&line);
            if question.is_none() {
                println!("No prompt provided. Exiting.");
            }
            Ok(question)
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            debug!("interactive prompt cancelled");
            println!("\nExiting.");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Trim the entered line; blank input means no question.
pub fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//! Shared CLI helpers: environment, logging, banner.

use std::path::PathBuf;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Default log filter; `RUST_LOG` takes precedence.
const DEFAULT_FILTER: &str = "warn,askllm=info";
const VERBOSE_FILTER: &str = "warn,askllm=debug";

/// Load a `.env` file from the working directory or a parent.
///
/// Variables already set in the process environment are kept.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

fn filter_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize tracing/logging on stderr so stdout carries only the answer.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// "Asking <provider> (<model>)..." on stderr.
pub fn print_banner(provider: &str, model: &str) {
    eprintln!(
        "{} {}",
        format!("Asking {}", provider).cyan().bold(),
        format!("({})...", model).dimmed()
    );
}

/// Header shown before the interactive question prompt.
pub fn print_interactive_header(provider: &str) {
    println!(
        "{}",
        format!("{} Interactive Mode (Ctrl+C to exit)", provider)
            .cyan()
            .bold()
    );
    println!("{}", "-".repeat(40).dimmed());
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

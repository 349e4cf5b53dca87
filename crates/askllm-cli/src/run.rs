//! Entry points behind the binaries.
//!
//! Provider errors are logged where they happen; here they only decide the
//! exit status. Nothing reaches stdout unless the call succeeded.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use askllm_core::config::{load_config, ProvidersConfig};
use askllm_core::{AskRequest, ProviderKind};
use askllm_providers::{
    ChunkSink, ClaudeProvider, ConsoleSink, GeminiProvider, LlmClient, OpenAiProvider,
    QwenProvider,
};

use crate::args::{AskArgs, QwenArgs};
use crate::{helpers, prompt};

// ─────────────────────────────────────────────
// ask-gemini / ask-claude / ask-openai
// ─────────────────────────────────────────────

/// Build the client for a provider from resolved configuration.
pub fn client_for(kind: ProviderKind, config: &ProvidersConfig) -> Box<dyn LlmClient> {
    match kind {
        ProviderKind::Gemini => Box::new(GeminiProvider::from_config(config)),
        ProviderKind::Claude => Box::new(ClaudeProvider::from_config(config)),
        ProviderKind::OpenAi => Box::new(OpenAiProvider::from_config(config)),
        ProviderKind::Qwen => Box::new(QwenProvider::from_config(config)),
    }
}

/// Ask once and write the answer to `out`.
pub async fn run_ask<W: Write>(
    client: &dyn LlmClient,
    request: &AskRequest,
    out: &mut W,
) -> Result<()> {
    let answer = client.ask(request).await?;
    writeln!(out, "{}", answer).context("failed to write answer")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// `main` for the three single-answer binaries.
pub async fn run_provider_cli(kind: ProviderKind) -> ExitCode {
    let args = AskArgs::parse_for(kind);
    let env_file = helpers::load_dotenv();
    helpers::init_logging(args.verbose);
    if let Some(path) = env_file {
        debug!(path = %path.display(), "loaded .env");
    }

    let client = client_for(kind, &load_config());
    let request = args.into_request();
    helpers::print_banner(client.display_name(), &client.resolve_model(&request));

    let mut stdout = io::stdout();
    exit_status(run_ask(client.as_ref(), &request, &mut stdout).await)
}

// ─────────────────────────────────────────────
// ask-qwen
// ─────────────────────────────────────────────

/// Stream one answer into `sink`.
pub async fn run_stream(
    provider: &QwenProvider,
    request: &AskRequest,
    sink: &mut dyn ChunkSink,
) -> Result<()> {
    provider.ask_stream(request, sink).await?;
    Ok(())
}

/// `main` for `ask-qwen`.
pub async fn run_qwen_cli() -> ExitCode {
    let args = QwenArgs::parse();
    let env_file = helpers::load_dotenv();
    helpers::init_logging(false);
    if let Some(path) = env_file {
        debug!(path = %path.display(), "loaded .env");
    }

    let question = match args.prompt() {
        Some(question) => question,
        None => match prompt::read_question(ProviderKind::Qwen.display_name()) {
            Ok(Some(question)) => question,
            Ok(None) => return ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "failed to read question");
                return ExitCode::FAILURE;
            }
        },
    };

    let provider = QwenProvider::from_config(&load_config());
    let mut sink = ConsoleSink::stdout();
    exit_status(run_stream(&provider, &AskRequest::new(question), &mut sink).await)
}

fn exit_status(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let detail = format!("{:#}", e);
            debug!(error = %detail, "exiting with failure");
            ExitCode::FAILURE
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

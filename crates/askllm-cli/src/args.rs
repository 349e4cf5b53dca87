//! Command-line arguments.

use clap::{ArgMatches, Command, CommandFactory, FromArgMatches, Parser};

use askllm_core::types::DEFAULT_TEMPERATURE;
use askllm_core::{AskRequest, ProviderKind};

// ─────────────────────────────────────────────
// ask-gemini / ask-claude / ask-openai
// ─────────────────────────────────────────────

/// Ask an LLM a question from the command line.
#[derive(Debug, Parser)]
#[command(version)]
pub struct AskArgs {
    /// The prompt to send
    pub prompt: String,

    /// System instruction
    #[arg(long)]
    pub system: Option<String>,

    /// Model to use (overrides the environment and built-in default)
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long = "temp", default_value_t = DEFAULT_TEMPERATURE, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Request a JSON response
    #[arg(long = "json", default_value_t = false)]
    pub json_mode: bool,

    /// Maximum output tokens (provider default when omitted)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl AskArgs {
    /// The clap command, named after the provider's binary.
    pub fn command_for(kind: ProviderKind) -> Command {
        Self::command()
            .name(bin_name(kind))
            .about(format!("Ask {} a question via command line.", kind.display_name()))
    }

    /// Parse the process arguments, exiting on error or `--help`.
    pub fn parse_for(kind: ProviderKind) -> Self {
        let matches = Self::command_for(kind).get_matches();
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self::from_arg_matches(matches).unwrap_or_else(|e| e.exit())
    }

    pub fn into_request(self) -> AskRequest {
        let mut request = AskRequest::new(self.prompt)
            .with_temperature(self.temperature)
            .with_json_mode(self.json_mode);
        if let Some(system) = self.system {
            request = request.with_system(system);
        }
        if let Some(model) = self.model {
            request = request.with_model(model);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request
    }
}

/// Binary name for a provider.
pub fn bin_name(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Gemini => "ask-gemini",
        ProviderKind::Claude => "ask-claude",
        ProviderKind::OpenAi => "ask-openai",
        ProviderKind::Qwen => "ask-qwen",
    }
}

// ─────────────────────────────────────────────
// ask-qwen
// ─────────────────────────────────────────────

/// Ask Qwen a question and stream the thinking process and answer.
///
/// Every argument is part of the question.
#[derive(Debug, Parser)]
#[command(name = "ask-qwen", disable_help_flag = true, disable_version_flag = true)]
pub struct QwenArgs {
    /// Question words, joined with spaces. Omit for interactive mode.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl QwenArgs {
    /// The joined question, or `None` when no (non-blank) words were given.
    pub fn prompt(&self) -> Option<String> {
        let joined = self.words.join(" ");
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(kind: ProviderKind, argv: &[&str]) -> AskArgs {
        let matches = AskArgs::command_for(kind).try_get_matches_from(argv).unwrap();
        AskArgs::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let args = parse(ProviderKind::Gemini, &["ask-gemini", "hello"]);
        assert_eq!(args.prompt, "hello");
        assert_eq!(args.temperature, 0.7);
        assert!(!args.json_mode);
        assert!(!args.verbose);

        let request = args.into_request();
        assert_eq!(request.system_instruction, None);
        assert_eq!(request.model, None);
        assert_eq!(request.max_tokens, None);
        assert_eq!(request.enable_thinking, None);
    }

    #[test]
    fn test_all_flags() {
        let args = parse(
            ProviderKind::OpenAi,
            &[
                "ask-openai",
                "--system",
                "be brief",
                "--model",
                "gpt-4o",
                "--temp",
                "1.5",
                "--json",
                "--max-tokens",
                "256",
                "-v",
                "list three colors",
            ],
        );
        assert!(args.verbose);

        let request = args.into_request();
        assert_eq!(request.prompt, "list three colors");
        assert_eq!(request.system(), Some("be brief"));
        assert_eq!(request.model.as_deref(), Some("gpt-4o"));
        assert_eq!(request.temperature, 1.5);
        assert!(request.json_mode);
        assert_eq!(request.max_tokens, Some(256));
    }

    #[test]
    fn test_negative_temperature_passes_through() {
        let args = parse(ProviderKind::OpenAi, &["ask-openai", "--temp", "-0.5", "hi"]);
        let request = args.into_request();
        assert_eq!(request.temperature, -0.5);
        assert_eq!(request.prompt, "hi");
    }

    #[test]
    fn test_prompt_is_required() {
        assert!(AskArgs::command_for(ProviderKind::Claude)
            .try_get_matches_from(["ask-claude"])
            .is_err());
    }

    #[test]
    fn test_command_named_after_binary() {
        assert_eq!(AskArgs::command_for(ProviderKind::Claude).get_name(), "ask-claude");
    }

    #[test]
    fn test_qwen_words_are_joined() {
        let args = QwenArgs::try_parse_from(["ask-qwen", "what", "is", "-1", "squared?"]).unwrap();
        assert_eq!(args.prompt().as_deref(), Some("what is -1 squared?"));
    }

    #[test]
    fn test_qwen_no_words_means_interactive() {
        let args = QwenArgs::try_parse_from(["ask-qwen"]).unwrap();
        assert_eq!(args.prompt(), None);

        let args = QwenArgs::try_parse_from(["ask-qwen", " "]).unwrap();
        assert_eq!(args.prompt(), None);
    }
}

use std::process::ExitCode;

use askllm_core::ProviderKind;

#[tokio::main]
async fn main() -> ExitCode {
    askllm_cli::run::run_provider_cli(ProviderKind::OpenAi).await
}

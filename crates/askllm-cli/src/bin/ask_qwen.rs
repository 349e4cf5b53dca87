use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    askllm_cli::run::run_qwen_cli().await
}

// Entrypoint for the CLI application: parse arguments, run one command,
// map the outcome to an exit code. See `cli::run`.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    labctl::cli::run().await
}

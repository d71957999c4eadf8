//! pixkit command-line tool
//!
//! Reads one image, applies one filter and writes the result. The output
//! format follows the output extension (`.png`, `.jpg`, `.jpeg`).

use pixkit::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        input = %command.input.display(),
        mode = command.operation.flag(),
        output = %command.output.display(),
        "processing"
    );

    match cli::run(&command) {
        Ok(()) => {
            tracing::info!(output = %command.output.display(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed");
            ExitCode::FAILURE
        }
    }
}

use ascult_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Fall back to stderr when the state dir is not writable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("ascult error: {:#}", err);
        std::process::exit(1);
    }
}

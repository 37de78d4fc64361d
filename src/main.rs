use apigen::cli::{run_cli, Cli};
use apigen::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {e:#}");
    }
    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "apigen failed");
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

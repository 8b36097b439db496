//! Podar CLI
//!
//! # Usage
//!
//! ```bash
//! # Run a study from config
//! podar run study.yaml
//!
//! # Override the trial count and export trials
//! podar run study.yaml --trials 20 --output trials.json
//!
//! # Validate config
//! podar validate study.yaml
//! ```

use clap::Parser;
use podar::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

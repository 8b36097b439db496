//! CLI command implementations

mod run;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command, LogLevel};

pub use run::format_summary;
pub use validate::format_config;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Run(args) => run::run_study(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}

//! CLI module for podar
//!
//! This module contains the argument types, command handlers and logging setup.

mod args;
mod commands;
mod logging;

pub use args::{Cli, Command, RunArgs, ValidateArgs};
pub use commands::{format_config, format_summary, run_command};
pub use logging::{init_tracing, LogLevel};

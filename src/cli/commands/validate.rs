//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::config::{load_config, PodarConfig};

/// Format a parsed configuration for display
pub fn format_config(config: &PodarConfig) -> String {
    let study = &config.study;
    let trainer = &config.trainer;
    let mut lines = vec![format!("  Monitor: {}", config.monitor)];
    if let Some(name) = &study.name {
        lines.push(format!("  Study: {name}"));
    }
    lines.push(format!("  Direction: {:?}", study.direction));
    lines.push(format!("  Trials: {}", study.n_trials));
    lines.push(format!("  Pruner: {:?}", study.pruner));
    lines.push(format!("  Epochs: {}..={}", trainer.min_epochs, trainer.max_epochs));
    lines.push(format!("  Sanity validation steps: {}", trainer.num_sanity_val_steps));
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &format!("✓ Configuration valid: {}", args.config.display()));
    log(level, LogLevel::Normal, &format_config(&config));
    Ok(())
}

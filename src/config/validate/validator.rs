//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::{PodarConfig, PrunerConfig};

/// Validate a run configuration
///
/// Checks:
/// - A monitor metric is named
/// - Trial and epoch counts are consistent
/// - Pruner parameters are in range
pub fn validate_config(config: &PodarConfig) -> Result<(), ValidationError> {
    if config.monitor.trim().is_empty() {
        return Err(ValidationError::EmptyMonitor);
    }

    if config.study.n_trials == 0 {
        return Err(ValidationError::InvalidTrials(config.study.n_trials));
    }

    let trainer = &config.trainer;
    if trainer.min_epochs > trainer.max_epochs {
        return Err(ValidationError::InvalidEpochs {
            min: trainer.min_epochs,
            max: trainer.max_epochs,
        });
    }
    if trainer.check_val_every_n_epoch == 0 {
        return Err(ValidationError::InvalidValInterval(trainer.check_val_every_n_epoch));
    }

    validate_pruner(&config.study.pruner)
}

fn validate_pruner(pruner: &PrunerConfig) -> Result<(), ValidationError> {
    match *pruner {
        PrunerConfig::Nop | PrunerConfig::Deterministic { .. } => Ok(()),
        PrunerConfig::Median { interval_steps, .. } => check_interval(interval_steps),
        PrunerConfig::Percentile { percentile, interval_steps, .. } => {
            if !(0.0..=100.0).contains(&percentile) {
                return Err(ValidationError::InvalidPercentile(percentile));
            }
            check_interval(interval_steps)
        }
        PrunerConfig::Threshold { lower, upper, interval_steps, .. } => {
            match (lower, upper) {
                (None, None) => return Err(ValidationError::EmptyThreshold),
                (Some(lower), Some(upper)) if lower > upper => {
                    return Err(ValidationError::InvertedThreshold { lower, upper });
                }
                _ => {}
            }
            check_interval(interval_steps)
        }
    }
}

fn check_interval(interval_steps: usize) -> Result<(), ValidationError> {
    if interval_steps == 0 {
        return Err(ValidationError::InvalidIntervalSteps(interval_steps));
    }
    Ok(())
}

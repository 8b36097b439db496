//! YAML schema definitions for study configuration

use serde::{Deserialize, Serialize};

use crate::hpo::{
    DeterministicPruner, MedianPruner, NopPruner, PercentilePruner, Pruner, StudyDirection,
    ThresholdPruner,
};
use crate::train::TrainConfig;

fn default_monitor() -> String {
    "accuracy".to_string()
}

fn default_startup_trials() -> usize {
    5
}

fn default_interval_steps() -> usize {
    1
}

fn default_min_trials() -> usize {
    1
}

/// Complete run configuration
///
/// # Example
///
/// ```yaml
/// monitor: accuracy
/// study:
///   direction: maximize
///   n_trials: 20
///   pruner:
///     type: median
///     n_warmup_steps: 2
/// trainer:
///   max_epochs: 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodarConfig {
    /// Validation metric reported to each trial
    #[serde(default = "default_monitor")]
    pub monitor: String,

    #[serde(default)]
    pub study: StudyConfig,

    #[serde(default)]
    pub trainer: TrainConfig,
}

impl Default for PodarConfig {
    fn default() -> Self {
        Self {
            monitor: default_monitor(),
            study: StudyConfig::default(),
            trainer: TrainConfig::default(),
        }
    }
}

/// Study settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    pub name: Option<String>,
    pub direction: StudyDirection,
    pub n_trials: usize,
    /// Seed for parameter sampling; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Record failing trials and keep optimizing instead of aborting
    pub catch_failures: bool,
    pub pruner: PrunerConfig,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            name: None,
            direction: StudyDirection::Maximize,
            n_trials: 10,
            seed: None,
            catch_failures: false,
            pruner: PrunerConfig::default(),
        }
    }
}

/// Pruner selection, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrunerConfig {
    Nop,
    Deterministic {
        prune: bool,
    },
    Median {
        #[serde(default = "default_startup_trials")]
        n_startup_trials: usize,
        #[serde(default)]
        n_warmup_steps: usize,
        #[serde(default = "default_interval_steps")]
        interval_steps: usize,
        #[serde(default = "default_min_trials")]
        n_min_trials: usize,
    },
    Percentile {
        percentile: f64,
        #[serde(default = "default_startup_trials")]
        n_startup_trials: usize,
        #[serde(default)]
        n_warmup_steps: usize,
        #[serde(default = "default_interval_steps")]
        interval_steps: usize,
        #[serde(default = "default_min_trials")]
        n_min_trials: usize,
    },
    Threshold {
        #[serde(default)]
        lower: Option<f64>,
        #[serde(default)]
        upper: Option<f64>,
        #[serde(default)]
        n_warmup_steps: usize,
        #[serde(default = "default_interval_steps")]
        interval_steps: usize,
    },
}

impl Default for PrunerConfig {
    fn default() -> Self {
        PrunerConfig::Median {
            n_startup_trials: default_startup_trials(),
            n_warmup_steps: 0,
            interval_steps: default_interval_steps(),
            n_min_trials: default_min_trials(),
        }
    }
}

impl PrunerConfig {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            PrunerConfig::Nop => "nop",
            PrunerConfig::Deterministic { .. } => "deterministic",
            PrunerConfig::Median { .. } => "median",
            PrunerConfig::Percentile { .. } => "percentile",
            PrunerConfig::Threshold { .. } => "threshold",
        }
    }

    /// Instantiate the configured pruner
    pub fn build(&self) -> Box<dyn Pruner> {
        match *self {
            PrunerConfig::Nop => Box::new(NopPruner),
            PrunerConfig::Deterministic { prune } => Box::new(DeterministicPruner::new(prune)),
            PrunerConfig::Median { n_startup_trials, n_warmup_steps, interval_steps, n_min_trials } => {
                Box::new(
                    MedianPruner::new()
                        .with_n_startup_trials(n_startup_trials)
                        .with_n_warmup_steps(n_warmup_steps)
                        .with_interval_steps(interval_steps)
                        .with_n_min_trials(n_min_trials),
                )
            }
            PrunerConfig::Percentile {
                percentile,
                n_startup_trials,
                n_warmup_steps,
                interval_steps,
                n_min_trials,
            } => Box::new(
                PercentilePruner::new(percentile)
                    .with_n_startup_trials(n_startup_trials)
                    .with_n_warmup_steps(n_warmup_steps)
                    .with_interval_steps(interval_steps)
                    .with_n_min_trials(n_min_trials),
            ),
            PrunerConfig::Threshold { lower, upper, n_warmup_steps, interval_steps } => Box::new(
                ThresholdPruner::new(lower, upper)
                    .with_n_warmup_steps(n_warmup_steps)
                    .with_interval_steps(interval_steps),
            ),
        }
    }
}

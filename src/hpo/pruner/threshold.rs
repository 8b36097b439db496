//! Threshold pruning

use super::{is_first_in_interval_step, PruneContext, Pruner};
use crate::hpo::types::FrozenTrial;

/// Prune when the latest intermediate value leaves `[lower, upper]`
///
/// NaN values are always pruned once warmup is over.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdPruner {
    lower: f64,
    upper: f64,
    n_warmup_steps: usize,
    interval_steps: usize,
}

impl ThresholdPruner {
    /// Create a pruner; missing bounds are unbounded
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower: lower.unwrap_or(f64::NEG_INFINITY),
            upper: upper.unwrap_or(f64::INFINITY),
            n_warmup_steps: 0,
            interval_steps: 1,
        }
    }

    pub fn with_n_warmup_steps(mut self, n: usize) -> Self {
        self.n_warmup_steps = n;
        self
    }

    pub fn with_interval_steps(mut self, n: usize) -> Self {
        debug_assert!(n > 0, "interval_steps must be > 0");
        self.interval_steps = n.max(1);
        self
    }
}

impl Pruner for ThresholdPruner {
    fn prune(&self, _ctx: &PruneContext<'_>, trial: &FrozenTrial) -> bool {
        let (Some(step), Some(latest)) = (trial.last_step(), trial.last_value()) else {
            return false;
        };
        if step < self.n_warmup_steps {
            return false;
        }
        if !is_first_in_interval_step(step, trial, self.n_warmup_steps, self.interval_steps) {
            return false;
        }
        latest.is_nan() || latest < self.lower || latest > self.upper
    }

    fn name(&self) -> &'static str {
        "ThresholdPruner"
    }
}

//! Percentile and median pruning
//!
//! A trial is pruned when its best intermediate value so far is worse than the
//! given percentile of the values that completed trials reported at the same
//! step.

use super::{is_first_in_interval_step, percentile, PruneContext, Pruner};
use crate::hpo::error::{HPOError, Result};
use crate::hpo::types::{FrozenTrial, StudyDirection};

/// Prune trials whose best intermediate value falls behind a percentile of
/// completed trials at the same step
#[derive(Debug, Clone, PartialEq)]
pub struct PercentilePruner {
    /// Percentile in [0, 100] to compare against
    percentile: f64,
    /// Completed trials required before any pruning happens
    n_startup_trials: usize,
    /// Steps reported before pruning is considered within a trial
    n_warmup_steps: usize,
    /// Pruning is checked once per interval of this many steps
    interval_steps: usize,
    /// Minimum number of completed trials with a value at the step
    n_min_trials: usize,
}

impl PercentilePruner {
    /// Create a pruner at the given percentile.
    ///
    /// `percentile` must lie in [0, 100]; debug builds assert it, release
    /// builds clamp it. Use [`PercentilePruner::try_new`] for unchecked input.
    pub fn new(percentile: f64) -> Self {
        debug_assert!(
            (0.0..=100.0).contains(&percentile),
            "percentile must be in [0, 100], got {percentile}"
        );
        Self {
            percentile: percentile.clamp(0.0, 100.0),
            n_startup_trials: 5,
            n_warmup_steps: 0,
            interval_steps: 1,
            n_min_trials: 1,
        }
    }

    /// Create a pruner, rejecting a percentile outside [0, 100] or NaN
    pub fn try_new(percentile: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(HPOError::InvalidValue(
                "percentile".to_string(),
                format!("{percentile} is not in [0, 100]"),
            ));
        }
        Ok(Self::new(percentile))
    }

    pub fn with_n_startup_trials(mut self, n: usize) -> Self {
        self.n_startup_trials = n;
        self
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

    pub fn with_n_min_trials(mut self, n: usize) -> Self {
        self.n_min_trials = n.max(1);
        self
    }

    pub fn percentile(&self) -> f64 {
        self.percentile
    }
}

impl Pruner for PercentilePruner {
    fn prune(&self, ctx: &PruneContext<'_>, trial: &FrozenTrial) -> bool {
        let Some(step) = trial.last_step() else {
            return false;
        };
        if step < self.n_warmup_steps {
            return false;
        }
        if !is_first_in_interval_step(step, trial, self.n_warmup_steps, self.interval_steps) {
            return false;
        }

        let n_completed = ctx.completed().count();
        if n_completed == 0 || n_completed < self.n_startup_trials {
            return false;
        }

        let best = ctx.direction.best_of(trial.intermediate_values.values().copied());
        if best.is_nan() {
            return true;
        }

        let q = match ctx.direction {
            StudyDirection::Minimize => self.percentile,
            StudyDirection::Maximize => 100.0 - self.percentile,
        };
        let at_step: Vec<f64> = ctx
            .completed()
            .filter_map(|t| t.intermediate_values.get(&step).copied())
            .filter(|v| !v.is_nan())
            .collect();
        if at_step.len() < self.n_min_trials {
            return false;
        }

        let threshold = percentile(&at_step, q);
        if threshold.is_nan() {
            return false;
        }
        match ctx.direction {
            StudyDirection::Minimize => best > threshold,
            StudyDirection::Maximize => best < threshold,
        }
    }

    fn name(&self) -> &'static str {
        "PercentilePruner"
    }
}

/// Percentile pruner fixed at the 50th percentile
#[derive(Debug, Clone, PartialEq)]
pub struct MedianPruner {
    inner: PercentilePruner,
}

impl MedianPruner {
    pub fn new() -> Self {
        Self { inner: PercentilePruner::new(50.0) }
    }

    pub fn with_n_startup_trials(mut self, n: usize) -> Self {
        self.inner = self.inner.with_n_startup_trials(n);
        self
    }

    pub fn with_n_warmup_steps(mut self, n: usize) -> Self {
        self.inner = self.inner.with_n_warmup_steps(n);
        self
    }

    pub fn with_interval_steps(mut self, n: usize) -> Self {
        self.inner = self.inner.with_interval_steps(n);
        self
    }

    pub fn with_n_min_trials(mut self, n: usize) -> Self {
        self.inner = self.inner.with_n_min_trials(n);
        self
    }
}

impl Default for MedianPruner {
    fn default() -> Self {
        Self::new()
    }
}

impl Pruner for MedianPruner {
    fn prune(&self, ctx: &PruneContext<'_>, trial: &FrozenTrial) -> bool {
        self.inner.prune(ctx, trial)
    }

    fn name(&self) -> &'static str {
        "MedianPruner"
    }
}

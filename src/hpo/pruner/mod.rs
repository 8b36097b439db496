//! Pruners decide whether a running trial should stop early
//!
//! A pruner sees the trial being evaluated (with its intermediate values)
//! and the other trials of the study. It is consulted through
//! [`Trial::should_prune`](crate::hpo::Trial::should_prune) after each report.
//!
//! # Example
//!
//! ```
//! use podar::hpo::{MedianPruner, Study, StudyDirection};
//!
//! let study = Study::new(StudyDirection::Maximize)
//!     .with_pruner(MedianPruner::default().with_n_warmup_steps(1));
//! assert_eq!(study.direction(), StudyDirection::Maximize);
//! ```

mod basic;
mod percentile;
mod threshold;


pub use basic::{DeterministicPruner, NopPruner};
pub use percentile::{MedianPruner, PercentilePruner};
pub use threshold::ThresholdPruner;

use super::types::{FrozenTrial, StudyDirection, TrialState};

/// Study state visible to a pruner
#[derive(Debug, Clone, Copy)]
pub struct PruneContext<'a> {
    /// Every trial of the study, including the one being evaluated
    pub trials: &'a [FrozenTrial],
    /// Study optimization direction
    pub direction: StudyDirection,
}

impl<'a> PruneContext<'a> {
    pub fn new(trials: &'a [FrozenTrial], direction: StudyDirection) -> Self {
        Self { trials, direction }
    }

    /// Trials that finished with `TrialState::Complete`
    pub fn completed(&self) -> impl Iterator<Item = &'a FrozenTrial> + 'a {
        self.trials.iter().filter(|t| t.state == TrialState::Complete)
    }
}

/// Decision policy for early-stopping unpromising trials
pub trait Pruner: Send + std::fmt::Debug {
    /// Return `true` if `trial` should stop now
    fn prune(&self, ctx: &PruneContext<'_>, trial: &FrozenTrial) -> bool;

    /// Pruner name for logging
    fn name(&self) -> &'static str {
        "Pruner"
    }
}

/// Whether `step` is the first report inside its pruning interval.
///
/// Intervals start at `n_warmup_steps` and repeat every `interval_steps`.
pub(crate) fn is_first_in_interval_step(
    step: usize,
    trial: &FrozenTrial,
    n_warmup_steps: usize,
    interval_steps: usize,
) -> bool {
    let interval = interval_steps.max(1);
    let offset = step.saturating_sub(n_warmup_steps);
    let nearest_lower_pruning_step = (offset / interval) * interval + n_warmup_steps;
    let second_last_step = trial.intermediate_values.range(..step).next_back().map(|(s, _)| *s);
    second_last_step.is_none_or(|s| s < nearest_lower_pruning_step)
}

/// Linear-interpolated percentile of `values`, NaN entries ignored.
///
/// Returns NaN for an empty (or all-NaN) input. `q` is in `[0, 100]`.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

//! Trial pruning callback
//!
//! Bridges the training loop and a [`Trial`]: after each validation pass the
//! monitored metric is reported as an intermediate value, and if the study's
//! pruner gives up on the trial, training is interrupted.

use tracing::{debug, warn};

use super::traits::{CallbackAction, CallbackContext, Interrupt, TrainerCallback};
use crate::hpo::Trial;

/// Outcome of evaluating one validation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PruneCheck {
    /// Sanity-check validation; nothing reported
    Skipped,
    /// The monitored metric was not logged; nothing reported
    MetricMissing,
    /// Value reported, trial keeps running
    Continue { step: usize, value: f64 },
    /// Value reported, pruner asked to stop
    Prune { step: usize, value: f64 },
}

/// Reports a validation metric to a trial and interrupts training when the
/// trial should be pruned
///
/// # Example
///
/// ```
/// use podar::hpo::{DeterministicPruner, Study, StudyDirection, TrialState};
/// use podar::train::callback::{CallbackAction, CallbackContext, PruningCallback, TrainerCallback};
/// use podar::train::MetricSnapshot;
///
/// let mut study = Study::new(StudyDirection::Maximize).with_pruner(DeterministicPruner::new(true));
/// study.optimize(|trial| {
///     let mut callback = PruningCallback::new(trial.clone(), "accuracy");
///     let ctx = CallbackContext {
///         metrics: MetricSnapshot::new().with("accuracy", 0.25),
///         ..CallbackContext::default()
///     };
///     match callback.on_validation_end(&ctx) {
///         CallbackAction::Interrupt(interrupt) => Err(podar::hpo::TrialPruned::new(interrupt.message).into()),
///         _ => Ok(0.25),
///     }
/// }, 1).unwrap();
///
/// assert_eq!(study.trials()[0].state, TrialState::Pruned);
/// ```
#[derive(Debug, Clone)]
pub struct PruningCallback {
    trial: Trial,
    monitor: String,
}

impl PruningCallback {
    pub const NAME: &'static str = "PruningCallback";

    /// Create a callback reporting `monitor` to `trial`.
    ///
    /// The metric name is not checked until the first validation pass.
    pub fn new(trial: Trial, monitor: impl Into<String>) -> Self {
        Self { trial, monitor: monitor.into() }
    }

    pub fn monitor(&self) -> &str {
        &self.monitor
    }

    pub fn trial(&self) -> &Trial {
        &self.trial
    }

    /// Report the monitored metric for this validation pass and ask for a
    /// pruning decision. The step is the current epoch.
    pub fn check(&self, ctx: &CallbackContext) -> PruneCheck {
        if ctx.sanity_checking {
            return PruneCheck::Skipped;
        }

        let Some(value) = ctx.metrics.get(&self.monitor) else {
            warn!(
                monitor = %self.monitor,
                trial = self.trial.number(),
                "The metric '{}' is not in the evaluation logs for pruning. \
                 Please make sure you set the correct metric name.",
                self.monitor
            );
            return PruneCheck::MetricMissing;
        };

        let step = ctx.epoch;
        if let Err(err) = self.trial.report(value, step) {
            warn!(trial = self.trial.number(), step, error = %err, "Intermediate value not reported");
        }

        if self.trial.should_prune() {
            PruneCheck::Prune { step, value }
        } else {
            debug!(trial = self.trial.number(), step, value, "trial continues");
            PruneCheck::Continue { step, value }
        }
    }
}

impl TrainerCallback for PruningCallback {
    fn on_validation_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        match self.check(ctx) {
            PruneCheck::Prune { step, .. } => CallbackAction::Interrupt(Interrupt::new(
                Self::NAME,
                step,
                format!("Trial was pruned at epoch {step}."),
            )),
            _ => CallbackAction::Continue,
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

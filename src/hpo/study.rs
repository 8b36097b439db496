//! Study: a set of trials sharing one objective

use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use super::error::{HPOError, Result, TrialError};
use super::pruner::{NopPruner, Pruner};
use super::trial::{lock, SharedState, StudyState, Trial};
use super::types::{FrozenTrial, StudyDirection, TrialState};
use crate::config::StudyConfig;

/// A collection of trials optimized against one objective
///
/// # Example
///
/// ```
/// use podar::hpo::{DeterministicPruner, Study, StudyDirection, TrialState};
///
/// let mut study = Study::new(StudyDirection::Minimize).with_pruner(DeterministicPruner::new(false));
/// study.optimize(|trial| {
///     let x = trial.suggest_float("x", -1.0, 1.0)?;
///     Ok(x * x)
/// }, 3).unwrap();
///
/// assert_eq!(study.trials().len(), 3);
/// assert!(study.trials().iter().all(|t| t.state == TrialState::Complete));
/// ```
#[derive(Debug)]
pub struct Study {
    name: String,
    state: SharedState,
    catch_failures: bool,
}

impl Study {
    /// Create a study with no pruning and an entropy-seeded sampler
    pub fn new(direction: StudyDirection) -> Self {
        let state = StudyState {
            trials: Vec::new(),
            direction,
            pruner: Box::new(NopPruner),
            rng: StdRng::from_os_rng(),
            created: Instant::now(),
        };
        Self { name: "study".to_string(), state: Arc::new(Mutex::new(state)), catch_failures: false }
    }

    /// Build a study from configuration
    pub fn from_config(config: &StudyConfig) -> Self {
        let mut study = Self::new(config.direction)
            .with_boxed_pruner(config.pruner.build())
            .with_catch_failures(config.catch_failures);
        if let Some(name) = &config.name {
            study = study.with_name(name);
        }
        if let Some(seed) = config.seed {
            study = study.with_seed(seed);
        }
        study
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_pruner<P: Pruner + 'static>(self, pruner: P) -> Self {
        self.with_boxed_pruner(Box::new(pruner))
    }

    pub fn with_boxed_pruner(self, pruner: Box<dyn Pruner>) -> Self {
        lock(&self.state).pruner = pruner;
        self
    }

    /// Make parameter sampling reproducible
    pub fn with_seed(self, seed: u64) -> Self {
        lock(&self.state).rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Keep optimizing when an objective fails instead of returning the error
    pub fn with_catch_failures(mut self, catch: bool) -> Self {
        self.catch_failures = catch;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> StudyDirection {
        lock(&self.state).direction
    }

    /// Snapshot of all trials, ordered by number
    pub fn trials(&self) -> Vec<FrozenTrial> {
        lock(&self.state).trials.clone()
    }

    /// Best completed trial
    pub fn best_trial(&self) -> Result<FrozenTrial> {
        let study = lock(&self.state);
        let direction = study.direction;
        study
            .trials
            .iter()
            .filter(|t| t.state == TrialState::Complete)
            .filter(|t| t.value.is_some())
            .fold(None::<&FrozenTrial>, |best, t| match (best, t.value) {
                (Some(b), Some(v)) if !direction.is_better(v, b.value.unwrap_or(f64::NAN)) => {
                    Some(b)
                }
                _ => Some(t),
            })
            .cloned()
            .ok_or(HPOError::NoTrials)
    }

    /// Objective value of the best completed trial
    pub fn best_value(&self) -> Result<f64> {
        self.best_trial()?.value.ok_or(HPOError::NoTrials)
    }

    /// Run `objective` for `n_trials` new trials.
    ///
    /// `Ok(value)` completes the trial, `TrialError::Pruned` records it as
    /// pruned, and `TrialError::Failed` records a failure and stops the
    /// optimization unless failures are caught.
    pub fn optimize<F>(&mut self, mut objective: F, n_trials: usize) -> Result<()>
    where
        F: FnMut(&Trial) -> std::result::Result<f64, TrialError>,
    {
        for _ in 0..n_trials {
            let trial = self.start_trial();
            let outcome = objective(&trial);
            self.finish_trial(trial.number(), outcome)?;
        }
        Ok(())
    }

    /// Serialize all trials as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.trials())?)
    }

    fn start_trial(&self) -> Trial {
        let mut study = lock(&self.state);
        let number = study.trials.len();
        let started = study.elapsed_ms();
        study.trials.push(FrozenTrial::new(number, started));
        Trial::new(Arc::clone(&self.state), number)
    }

    fn finish_trial(
        &self,
        number: usize,
        outcome: std::result::Result<f64, TrialError>,
    ) -> Result<()> {
        let mut study = lock(&self.state);
        let now = study.elapsed_ms();
        let record = &mut study.trials[number];

        match outcome {
            Ok(value) if value.is_nan() => {
                record.finish(TrialState::Failed, None, now);
                warn!(study = %self.name, trial = number, "Trial failed because the objective function returned nan.");
                Ok(())
            }
            Ok(value) => {
                record.finish(TrialState::Complete, Some(value), now);
                info!(
                    study = %self.name,
                    trial = number,
                    value,
                    params = ?record.params,
                    "Trial finished"
                );
                Ok(())
            }
            Err(TrialError::Pruned(pruned)) => {
                let last = record.last_value();
                record.finish(TrialState::Pruned, last, now);
                info!(study = %self.name, trial = number, "Trial pruned. {pruned}");
                Ok(())
            }
            Err(TrialError::Failed(message)) => {
                record.finish(TrialState::Failed, None, now);
                warn!(study = %self.name, trial = number, error = %message, "Trial failed");
                if self.catch_failures {
                    Ok(())
                } else {
                    Err(HPOError::TrialFailed { number, message })
                }
            }
        }
    }
}

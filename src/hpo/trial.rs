//! Handle to the running trial of a study
//!
//! A [`Trial`] is handed to the objective by [`Study::optimize`](super::Study::optimize).
//! It samples parameters, records intermediate values and asks the study's
//! pruner whether the run should stop.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::error::{HPOError, Result};
use super::pruner::{PruneContext, Pruner};
use super::types::{FrozenTrial, ParameterDomain, ParameterValue, StudyDirection, TrialState};

/// State shared by a study and the handles of its trials
#[derive(Debug)]
pub(crate) struct StudyState {
    pub(crate) trials: Vec<FrozenTrial>,
    pub(crate) direction: StudyDirection,
    pub(crate) pruner: Box<dyn Pruner>,
    pub(crate) rng: StdRng,
    pub(crate) created: Instant,
}

impl StudyState {
    pub(crate) fn elapsed_ms(&self) -> u64 {
        self.created.elapsed().as_millis() as u64
    }
}

pub(crate) type SharedState = Arc<Mutex<StudyState>>;

pub(crate) fn lock(state: &SharedState) -> MutexGuard<'_, StudyState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A single evaluation of a hyperparameter configuration
#[derive(Debug, Clone)]
pub struct Trial {
    study: SharedState,
    number: usize,
}

impl Trial {
    pub(crate) fn new(study: SharedState, number: usize) -> Self {
        Self { study, number }
    }

    /// Trial number within the study
    pub fn number(&self) -> usize {
        self.number
    }

    /// Current state
    pub fn state(&self) -> TrialState {
        lock(&self.study).trials[self.number].state
    }

    /// Parameters sampled so far
    pub fn params(&self) -> BTreeMap<String, ParameterValue> {
        lock(&self.study).trials[self.number].params.clone()
    }

    /// Intermediate values reported so far, keyed by step
    pub fn intermediate_values(&self) -> BTreeMap<usize, f64> {
        lock(&self.study).trials[self.number].intermediate_values.clone()
    }

    /// Report an intermediate objective value at `step`.
    ///
    /// Steps must not decrease. Reporting a step that was already reported
    /// keeps the first value and logs a warning. Non-finite values are stored
    /// as given; pruners decide how to treat them.
    pub fn report(&self, value: f64, step: usize) -> Result<()> {
        let mut study = lock(&self.study);
        let trial = &mut study.trials[self.number];
        if trial.state != TrialState::Running {
            return Err(HPOError::TrialNotRunning { number: self.number, state: trial.state });
        }

        if let Some(last) = trial.last_step() {
            if step < last {
                return Err(HPOError::StepRegression { number: self.number, step, last });
            }
            if step == last {
                warn!(
                    trial = self.number,
                    step, "The reported value is ignored because this step is already reported."
                );
                return Ok(());
            }
        }

        debug!(trial = self.number, step, value, "reported intermediate value");
        trial.intermediate_values.insert(step, value);
        Ok(())
    }

    /// Ask the study's pruner whether this trial should stop now
    pub fn should_prune(&self) -> bool {
        let study = lock(&self.study);
        let trial = &study.trials[self.number];
        let ctx = PruneContext::new(&study.trials, study.direction);
        let decision = study.pruner.prune(&ctx, trial);
        debug!(
            trial = self.number,
            pruner = study.pruner.name(),
            step = ?trial.last_step(),
            decision,
            "prune check"
        );
        decision
    }

    /// Sample a parameter from `domain`.
    ///
    /// Suggesting the same name twice returns the stored value when it still
    /// lies in the domain.
    pub fn suggest(&self, name: &str, domain: ParameterDomain) -> Result<ParameterValue> {
        domain.check(name)?;

        let mut guard = lock(&self.study);
        let study = &mut *guard;
        let trial = &mut study.trials[self.number];
        if trial.state != TrialState::Running {
            return Err(HPOError::TrialNotRunning { number: self.number, state: trial.state });
        }

        if let Some(existing) = trial.params.get(name) {
            if domain.is_valid(existing) {
                return Ok(existing.clone());
            }
            return Err(HPOError::InvalidValue(
                name.to_string(),
                format!("{existing:?} was already suggested outside {domain:?}"),
            ));
        }

        let value = domain.sample(&mut study.rng);
        debug!(trial = self.number, name, value = ?value, "suggested parameter");
        trial.params.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Sample a float uniformly from [low, high]
    pub fn suggest_float(&self, name: &str, low: f64, high: f64) -> Result<f64> {
        let value =
            self.suggest(name, ParameterDomain::Continuous { low, high, log_scale: false })?;
        Self::expect_float(name, &value)
    }

    /// Sample a float log-uniformly from [low, high]
    pub fn suggest_float_log(&self, name: &str, low: f64, high: f64) -> Result<f64> {
        let value = self.suggest(name, ParameterDomain::Continuous { low, high, log_scale: true })?;
        Self::expect_float(name, &value)
    }

    /// Sample an integer from [low, high]
    pub fn suggest_int(&self, name: &str, low: i64, high: i64) -> Result<i64> {
        match self.suggest(name, ParameterDomain::Discrete { low, high })? {
            ParameterValue::Int(v) => Ok(v),
            other => Err(HPOError::InvalidValue(name.to_string(), format!("{other:?}"))),
        }
    }

    /// Sample one of `choices`
    pub fn suggest_categorical(&self, name: &str, choices: &[&str]) -> Result<String> {
        let domain = ParameterDomain::Categorical {
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
        };
        match self.suggest(name, domain)? {
            ParameterValue::Categorical(v) => Ok(v),
            other => Err(HPOError::InvalidValue(name.to_string(), format!("{other:?}"))),
        }
    }

    fn expect_float(name: &str, value: &ParameterValue) -> Result<f64> {
        match value {
            ParameterValue::Float(v) => Ok(*v),
            other => Err(HPOError::InvalidValue(name.to_string(), format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hpo::{DeterministicPruner, Study};
    use proptest::prelude::*;

    /// Run `body` inside a single trial of a fresh study and return the study
    fn with_trial(body: impl FnOnce(&Trial)) -> Study {
        let mut study = Study::new(StudyDirection::Minimize).with_seed(0);
        let mut body = Some(body);
        study
            .optimize(
                |trial| {
                    if let Some(f) = body.take() {
                        f(trial);
                    }
                    Ok(0.0)
                },
                1,
            )
            .expect("optimize");
        study
    }

    #[test]
    fn test_report_records_values_in_step_order() {
        let study = with_trial(|trial| {
            trial.report(0.9, 0).expect("report");
            trial.report(0.8, 1).expect("report");
            trial.report(0.5, 5).expect("report");
            assert_eq!(trial.intermediate_values().len(), 3);
        });
        let values: Vec<(usize, f64)> =
            study.trials()[0].intermediate_values.clone().into_iter().collect();
        assert_eq!(values, vec![(0, 0.9), (1, 0.8), (5, 0.5)]);
    }

    #[test]
    fn test_report_duplicate_step_keeps_first_value() {
        with_trial(|trial| {
            trial.report(0.9, 2).expect("report");
            trial.report(0.1, 2).expect("duplicate is ignored, not rejected");
            assert_eq!(trial.intermediate_values()[&2], 0.9);
        });
    }

    #[test]
    fn test_report_rejects_step_regression() {
        with_trial(|trial| {
            trial.report(0.9, 3).expect("report");
            let err = trial.report(0.8, 1).expect_err("regression");
            assert!(matches!(err, HPOError::StepRegression { step: 1, last: 3, .. }));
            assert_eq!(trial.intermediate_values().len(), 1);
        });
    }

    #[test]
    fn test_report_passes_non_finite_values_through() {
        with_trial(|trial| {
            trial.report(f64::NAN, 0).expect("nan accepted");
            trial.report(f64::INFINITY, 1).expect("inf accepted");
            let values = trial.intermediate_values();
            assert!(values[&0].is_nan());
            assert!(values[&1].is_infinite());
        });
    }

    #[test]
    fn test_report_after_finish_is_rejected() {
        let mut handle = None;
        let mut study = Study::new(StudyDirection::Minimize);
        study
            .optimize(
                |trial| {
                    handle = Some(trial.clone());
                    Ok(1.0)
                },
                1,
            )
            .expect("optimize");
        let trial = handle.expect("trial handle");
        assert_eq!(trial.state(), TrialState::Complete);
        let err = trial.report(0.5, 0).expect_err("finished trial");
        assert!(matches!(err, HPOError::TrialNotRunning { state: TrialState::Complete, .. }));
    }

    #[test]
    fn test_should_prune_follows_pruner() {
        let mut study = Study::new(StudyDirection::Minimize).with_pruner(DeterministicPruner::new(true));
        study
            .optimize(
                |trial| {
                    assert!(trial.should_prune());
                    Ok(0.0)
                },
                1,
            )
            .expect("optimize");
    }

    #[test]
    fn test_suggest_float_within_bounds() {
        with_trial(|trial| {
            let lr = trial.suggest_float_log("lr", 1e-4, 1e-1).expect("suggest");
            assert!((1e-4..=1e-1).contains(&lr));
            let momentum = trial.suggest_float("momentum", 0.0, 0.99).expect("suggest");
            assert!((0.0..=0.99).contains(&momentum));
            assert_eq!(trial.params().len(), 2);
        });
    }

    #[test]
    fn test_suggest_same_name_returns_stored_value() {
        with_trial(|trial| {
            let first = trial.suggest_int("units", 1, 64).expect("suggest");
            let second = trial.suggest_int("units", 1, 64).expect("suggest");
            assert_eq!(first, second);
        });
    }

    #[test]
    fn test_suggest_conflicting_domain_is_rejected() {
        with_trial(|trial| {
            trial.suggest_categorical("optimizer", &["sgd"]).expect("suggest");
            let err = trial.suggest_categorical("optimizer", &["adam"]).expect_err("conflict");
            assert!(matches!(err, HPOError::InvalidValue(name, _) if name == "optimizer"));
        });
    }

    #[test]
    fn test_suggest_invalid_domain_is_rejected() {
        with_trial(|trial| {
            assert!(matches!(
                trial.suggest_float("lr", 1.0, 0.0),
                Err(HPOError::InvalidDomain(..))
            ));
            assert!(trial.params().is_empty());
        });
    }

    proptest! {
        /// Accepted reports are always stored in non-decreasing step order
        #[test]
        fn reports_never_regress(steps in proptest::collection::vec(0usize..20, 1..30)) {
            let mut accepted = Vec::new();
            with_trial(|trial| {
                for (i, step) in steps.iter().enumerate() {
                    if trial.report(i as f64, *step).is_ok() {
                        accepted.push(*step);
                    }
                }
                let stored: Vec<usize> = trial.intermediate_values().keys().copied().collect();
                assert!(stored.windows(2).all(|w| w[0] < w[1]));
            });
            prop_assert!(accepted.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

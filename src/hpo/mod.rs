//! Hyperparameter optimization: studies, trials and pruners
//!
//! A [`Study`] runs an objective once per [`Trial`]. During training the
//! objective reports intermediate values with [`Trial::report`] and asks
//! [`Trial::should_prune`] whether to give up early; the answer comes from the
//! study's [`Pruner`]. Returning [`TrialPruned`] from the objective records the
//! trial as [`TrialState::Pruned`].
//!
//! # Example
//!
//! ```
//! use podar::hpo::{MedianPruner, Study, StudyDirection, TrialPruned};
//!
//! let mut study = Study::new(StudyDirection::Minimize)
//!     .with_pruner(MedianPruner::new().with_n_startup_trials(1))
//!     .with_seed(42);
//!
//! study.optimize(|trial| {
//!     let lr = trial.suggest_float_log("lr", 1e-4, 1e-1)?;
//!     let mut loss = 1.0;
//!     for epoch in 0..5 {
//!         loss *= 1.0 - lr;
//!         trial.report(loss, epoch)?;
//!         if trial.should_prune() {
//!             return Err(TrialPruned::new(format!("pruned at epoch {epoch}")).into());
//!         }
//!     }
//!     Ok(loss)
//! }, 4).unwrap();
//! ```

mod error;
mod pruner;
mod study;
mod trial;
mod types;

pub use error::{HPOError, Result, TrialError, TrialPruned};
pub use pruner::{
    percentile, DeterministicPruner, MedianPruner, NopPruner, PercentilePruner, PruneContext,
    Pruner, ThresholdPruner,
};
pub use study::Study;
pub use trial::Trial;
pub use types::{FrozenTrial, ParameterDomain, ParameterValue, StudyDirection, TrialState};

//! Podar: hyperparameter studies with trial pruning
//!
//! Podar connects a hyperparameter study to a training loop. Each trial
//! trains a model with a [`Trainer`](train::Trainer); a
//! [`PruningCallback`](train::PruningCallback) reports a validation metric
//! to the trial after every epoch and interrupts training when the study's
//! pruner decides the trial is not promising.
//!
//! # Modules
//!
//! - [`hpo`]: studies, trials, parameter suggestion and pruners
//! - [`train`]: training loop, callbacks and logged metrics
//! - [`config`]: YAML configuration
//! - [`demo`]: a small classifier for trying the pieces together
//! - [`cli`]: the `podar` command line
//!
//! # Example
//!
//! ```
//! use podar::demo::LinearClassifier;
//! use podar::hpo::{MedianPruner, Study, StudyDirection};
//! use podar::train::{PruningCallback, TrainConfig, Trainer};
//!
//! let mut study = Study::new(StudyDirection::Maximize)
//!     .with_pruner(MedianPruner::new())
//!     .with_seed(0);
//!
//! study
//!     .optimize(
//!         |trial| {
//!             let lr = trial.suggest_float_log("lr", 1e-3, 1.0)?;
//!             let mut model = LinearClassifier::new(0).with_lr(lr as f32);
//!             let mut trainer = Trainer::new(TrainConfig::default().with_max_epochs(3));
//!             trainer.add_callback(PruningCallback::new(trial.clone(), "accuracy"));
//!             let result = trainer.fit(&mut model)?;
//!             Ok(result.callback_metrics.get("accuracy").unwrap_or(0.0))
//!         },
//!         4,
//!     )
//!     .unwrap();
//!
//! assert_eq!(study.trials().len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod hpo;
pub mod train;

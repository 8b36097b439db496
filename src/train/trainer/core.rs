//! Core Trainer struct and basic methods

use std::time::Instant;

use crate::train::callback::{CallbackContext, CallbackManager, TrainerCallback};
use crate::train::{MetricSnapshot, TrainConfig};

/// Drives a [`TrainModule`](crate::train::TrainModule) through epochs and
/// dispatches callback events
///
/// # Example
///
/// ```
/// use podar::demo::LinearClassifier;
/// use podar::train::{EarlyStopping, TrainConfig, Trainer};
///
/// let mut trainer = Trainer::new(TrainConfig::default().with_max_epochs(2));
/// trainer.add_callback(EarlyStopping::new("accuracy", 5, 0.0).maximize());
///
/// let mut model = LinearClassifier::new(0);
/// let result = trainer.fit(&mut model).unwrap();
/// assert_eq!(result.epochs_completed, 2);
/// ```
pub struct Trainer {
    /// Training configuration
    pub(crate) config: TrainConfig,

    /// Callback manager
    pub(crate) callbacks: CallbackManager,

    /// Metrics logged so far in the current fit
    pub(crate) callback_metrics: MetricSnapshot,

    /// Optimizer steps taken in the current fit
    pub(crate) global_step: usize,

    /// Training start time
    pub(crate) start_time: Option<Instant>,
}

impl Trainer {
    /// Create a new trainer
    pub fn new(config: TrainConfig) -> Self {
        Self {
            config,
            callbacks: CallbackManager::new(),
            callback_metrics: MetricSnapshot::new(),
            global_step: 0,
            start_time: None,
        }
    }

    /// Add a callback to the trainer
    pub fn add_callback<C: TrainerCallback + 'static>(&mut self, callback: C) {
        self.callbacks.add(callback);
    }

    /// Registered callbacks
    pub fn callbacks(&self) -> &CallbackManager {
        &self.callbacks
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Metrics logged by the latest (non sanity-check) validation and epoch
    pub fn callback_metrics(&self) -> &MetricSnapshot {
        &self.callback_metrics
    }

    pub fn global_step(&self) -> usize {
        self.global_step
    }

    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.start_time.map_or(0.0, |t| t.elapsed().as_secs_f64())
    }

    /// Build a callback context from the trainer state
    pub(crate) fn build_context(
        &self,
        epoch: usize,
        step: usize,
        steps_per_epoch: usize,
        loss: f32,
    ) -> CallbackContext {
        CallbackContext {
            epoch,
            max_epochs: self.config.max_epochs,
            step,
            steps_per_epoch,
            global_step: self.global_step,
            loss,
            metrics: self.callback_metrics.clone(),
            sanity_checking: false,
            elapsed_secs: self.elapsed_secs(),
        }
    }
}

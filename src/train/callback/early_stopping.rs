//! Early stopping callback to halt training when a metric plateaus

use tracing::{info, warn};

use super::traits::{CallbackAction, CallbackContext, TrainerCallback};

/// Early stopping callback to halt training when a metric plateaus
///
/// Monitors a named validation metric and requests a graceful stop if no
/// improvement is seen for `patience` validation passes.
///
/// # Example
///
/// ```rust
/// use podar::train::callback::EarlyStopping;
///
/// // Stop if validation loss does not improve by 0.001 for 5 epochs
/// let early_stop = EarlyStopping::new("val_loss", 5, 0.001);
///
/// // Accuracy should go up instead
/// let early_stop = EarlyStopping::new("accuracy", 3, 0.0).maximize();
/// ```
#[derive(Clone, Debug)]
pub struct EarlyStopping {
    /// Metric to monitor
    monitor: String,
    /// Number of epochs to wait for improvement
    patience: usize,
    /// Minimum improvement to reset patience
    min_delta: f64,
    /// Whether larger values are better
    maximize: bool,
    /// Best value seen so far
    best: Option<f64>,
    /// Epochs without improvement
    pub(crate) epochs_without_improvement: usize,
}

impl EarlyStopping {
    /// Create new early stopping callback (lower is better)
    pub fn new(monitor: impl Into<String>, patience: usize, min_delta: f64) -> Self {
        Self {
            monitor: monitor.into(),
            patience,
            min_delta: min_delta.abs(),
            maximize: false,
            best: None,
            epochs_without_improvement: 0,
        }
    }

    /// Treat larger metric values as better
    pub fn maximize(mut self) -> Self {
        self.maximize = true;
        self
    }

    pub fn monitor(&self) -> &str {
        &self.monitor
    }

    /// Best value observed so far
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// Reset internal state
    pub fn reset(&mut self) {
        self.best = None;
        self.epochs_without_improvement = 0;
    }

    /// Check if the metric improved
    fn check_improvement(&mut self, value: f64) -> bool {
        let improved = match self.best {
            None => !value.is_nan(),
            Some(best) if self.maximize => value > best + self.min_delta,
            Some(best) => value < best - self.min_delta,
        };
        if improved {
            self.best = Some(value);
            self.epochs_without_improvement = 0;
        } else {
            self.epochs_without_improvement += 1;
        }
        improved
    }
}

impl TrainerCallback for EarlyStopping {
    fn on_validation_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        if ctx.sanity_checking {
            return CallbackAction::Continue;
        }
        let Some(value) = ctx.metrics.get(&self.monitor) else {
            warn!(monitor = %self.monitor, "Early stopping metric not found in logged metrics");
            return CallbackAction::Continue;
        };
        self.check_improvement(value);

        if self.epochs_without_improvement >= self.patience {
            info!(
                monitor = %self.monitor,
                patience = self.patience,
                best = ?self.best,
                "Early stopping: no improvement"
            );
            CallbackAction::Stop
        } else {
            CallbackAction::Continue
        }
    }

    fn name(&self) -> &'static str {
        "EarlyStopping"
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::train::MetricSnapshot;
    use proptest::prelude::*;

    fn ctx(epoch: usize, value: f64) -> CallbackContext {
        CallbackContext {
            epoch,
            metrics: MetricSnapshot::new().with("val_loss", value),
            ..CallbackContext::default()
        }
    }

    proptest! {
        /// Early stopping should always stop after patience epochs without improvement
        #[test]
        fn early_stopping_respects_patience(
            patience in 1usize..10,
            min_delta in 0.0001f64..0.1,
            initial in 0.1f64..10.0,
        ) {
            let mut es = EarlyStopping::new("val_loss", patience, min_delta);
            es.on_validation_end(&ctx(0, initial));

            for epoch in 1..=patience {
                let action = es.on_validation_end(&ctx(epoch, initial));
                if epoch < patience {
                    prop_assert_eq!(action, CallbackAction::Continue);
                } else {
                    prop_assert_eq!(action, CallbackAction::Stop);
                }
            }
        }

        /// Early stopping counter should reset on improvement
        #[test]
        fn early_stopping_resets_on_improvement(
            patience in 2usize..10,
            min_delta in 0.001f64..0.1,
            initial in 1.0f64..10.0,
            improvement in 0.2f64..0.5,
        ) {
            let mut es = EarlyStopping::new("val_loss", patience, min_delta);
            es.on_validation_end(&ctx(0, initial));
            es.on_validation_end(&ctx(1, initial));
            prop_assert!(es.epochs_without_improvement >= 1);

            es.on_validation_end(&ctx(2, initial - improvement));
            prop_assert_eq!(es.epochs_without_improvement, 0);
        }
    }
}

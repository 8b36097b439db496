//! Training result types

use crate::train::MetricSnapshot;

/// Result of a training run that was not interrupted
#[derive(Debug, Clone)]
pub struct TrainResult {
    /// Epochs fully run (skipped epochs excluded)
    pub epochs_completed: usize,
    /// Optimizer steps taken
    pub global_step: usize,
    /// Mean training loss of the last epoch
    pub final_loss: f32,
    /// Whether a callback stopped training before `max_epochs`
    pub stopped_early: bool,
    /// Metrics logged by the last epoch
    pub callback_metrics: MetricSnapshot,
    /// Total training time in seconds
    pub elapsed_secs: f64,
}

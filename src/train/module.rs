//! Trainable module interface

use super::batch::Batch;
use super::error::Result;
use super::metrics::MetricSnapshot;

/// A model together with its data and per-batch train/validation logic
///
/// The [`Trainer`](super::Trainer) owns the loop; the module only answers
/// for one batch at a time.
pub trait TrainModule {
    /// Run forward/backward/update on one batch and return its loss
    fn training_step(&mut self, batch: &Batch, batch_idx: usize) -> Result<f32>;

    /// Evaluate one validation batch
    fn validation_step(&mut self, batch: &Batch, batch_idx: usize) -> Result<MetricSnapshot>;

    /// Aggregate validation outputs into the metrics logged for this epoch
    fn validation_epoch_end(&mut self, outputs: &[MetricSnapshot]) -> MetricSnapshot {
        MetricSnapshot::mean_of(outputs)
    }

    /// Batches for one training epoch
    fn train_batches(&self) -> Vec<Batch>;

    /// Batches for one validation pass; empty disables validation
    fn val_batches(&self) -> Vec<Batch> {
        Vec::new()
    }
}

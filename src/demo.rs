//! Minimal classifier used by the CLI and the integration tests

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hpo::{Trial, TrialError};
use crate::train::{
    Batch, MetricSnapshot, PruningCallback, Result, TrainConfig, TrainModule, Trainer,
};

const IN_FEATURES: usize = 4;
const CLASSES: usize = 8;
const SAMPLES: usize = 3;

/// Single linear layer (4 -> 8) trained with plain SGD on raw-output NLL
///
/// The dataset is three zero vectors labelled 0, served one sample per
/// batch for both training and validation. Each validation step logs
/// `validation_accuracy`; the epoch end logs the mean as `accuracy`.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    weight: Array2<f32>,
    bias: Array1<f32>,
    lr: f32,
}

impl LinearClassifier {
    /// Create a classifier with weights drawn uniformly from
    /// `[-1/sqrt(in), 1/sqrt(in))` using `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bound = 1.0 / (IN_FEATURES as f32).sqrt();
        let weight =
            Array2::from_shape_fn((IN_FEATURES, CLASSES), |_| rng.random_range(-bound..bound));
        let bias = Array1::from_shape_fn(CLASSES, |_| rng.random_range(-bound..bound));
        Self { weight, bias, lr: 1e-2 }
    }

    pub fn with_lr(mut self, lr: f32) -> Self {
        self.lr = lr;
        self
    }

    /// Raw class scores, shape `(batch, 8)`
    pub fn forward(&self, inputs: &Array2<f32>) -> Array2<f32> {
        inputs.dot(&self.weight) + &self.bias
    }

    fn dataset() -> Vec<Batch> {
        let inputs = Array2::zeros((SAMPLES, IN_FEATURES));
        let targets = Array1::zeros(SAMPLES);
        Batch::chunked(&inputs, &targets, 1)
    }
}

impl TrainModule for LinearClassifier {
    fn training_step(&mut self, batch: &Batch, _batch_idx: usize) -> Result<f32> {
        let output = self.forward(&batch.inputs);
        let n = batch.size().max(1) as f32;

        let mut grad_w = Array2::<f32>::zeros(self.weight.raw_dim());
        let mut grad_b = Array1::<f32>::zeros(CLASSES);
        let mut loss = 0.0;
        for (i, (&target, row)) in
            batch.targets.iter().zip(batch.inputs.axis_iter(Axis(0))).enumerate()
        {
            loss -= output[[i, target]];
            let mut column = grad_w.column_mut(target);
            column.scaled_add(-1.0 / n, &row);
            grad_b[target] -= 1.0 / n;
        }

        self.weight.scaled_add(-self.lr, &grad_w);
        self.bias.scaled_add(-self.lr, &grad_b);
        Ok(loss / n)
    }

    fn validation_step(&mut self, batch: &Batch, _batch_idx: usize) -> Result<MetricSnapshot> {
        let output = self.forward(&batch.inputs);
        let correct = output
            .axis_iter(Axis(0))
            .zip(batch.targets.iter())
            .filter(|(scores, target)| argmax(scores.iter().copied()) == Some(**target))
            .count();
        let accuracy = correct as f64 / batch.size().max(1) as f64;
        Ok(MetricSnapshot::new().with("validation_accuracy", accuracy))
    }

    fn validation_epoch_end(&mut self, outputs: &[MetricSnapshot]) -> MetricSnapshot {
        let values: Vec<f64> =
            outputs.iter().filter_map(|o| o.get("validation_accuracy")).collect();
        let mut logged = MetricSnapshot::new();
        if !values.is_empty() {
            logged.insert("accuracy", values.iter().sum::<f64>() / values.len() as f64);
        }
        logged
    }

    fn train_batches(&self) -> Vec<Batch> {
        Self::dataset()
    }

    fn val_batches(&self) -> Vec<Batch> {
        Self::dataset()
    }
}

/// Train one [`LinearClassifier`] for `trial` with a [`PruningCallback`]
/// on `monitor`, returning the final value of `monitor`
///
/// Samples `lr` (log-uniform in `[1e-3, 1]`) and the init `seed`.
pub fn objective(trial: &Trial, monitor: &str, config: &TrainConfig) -> std::result::Result<f64, TrialError> {
    let lr = trial.suggest_float_log("lr", 1e-3, 1.0)?;
    let seed = trial.suggest_int("seed", 0, 1023)?;

    let mut model = LinearClassifier::new(seed.unsigned_abs()).with_lr(lr as f32);
    let mut trainer = Trainer::new(config.clone());
    trainer.add_callback(PruningCallback::new(trial.clone(), monitor));

    let result = trainer.fit(&mut model)?;
    result
        .callback_metrics
        .get(monitor)
        .ok_or_else(|| TrialError::failed(format!("metric '{monitor}' was never logged")))
}

fn argmax(values: impl Iterator<Item = f32>) -> Option<usize> {
    values
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

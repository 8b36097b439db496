//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Monitor metric name cannot be empty")]
    EmptyMonitor,

    #[error("Invalid trial count: {0} (must be > 0)")]
    InvalidTrials(usize),

    #[error("Invalid epochs: min_epochs {min} exceeds max_epochs {max}")]
    InvalidEpochs { min: usize, max: usize },

    #[error("Invalid validation interval: {0} (must be > 0)")]
    InvalidValInterval(usize),

    #[error("Invalid percentile: {0} (must be in [0.0, 100.0])")]
    InvalidPercentile(f64),

    #[error("Invalid pruner interval steps: {0} (must be > 0)")]
    InvalidIntervalSteps(usize),

    #[error("Threshold pruner needs a lower or an upper bound")]
    EmptyThreshold,

    #[error("Invalid threshold bounds: lower {lower} > upper {upper}")]
    InvertedThreshold { lower: f64, upper: f64 },
}

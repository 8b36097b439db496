//! Training error types

use thiserror::Error;

use super::callback::Interrupt;
use crate::hpo::{TrialError, TrialPruned};

/// Training errors
#[derive(Debug, Error)]
pub enum TrainError {
    /// A callback ended the run; not a failure of the model or data
    #[error("Training interrupted by {}: {}", .0.callback, .0.message)]
    Interrupted(Interrupt),

    #[error("Empty training dataset")]
    EmptyDataset,

    #[error("Step failed: {0}")]
    Step(String),

    #[error("Invalid trainer config: {0}")]
    InvalidConfig(String),
}

impl TrainError {
    /// Whether the run was stopped by a callback interrupt
    pub fn is_interrupt(&self) -> bool {
        matches!(self, TrainError::Interrupted(_))
    }
}

/// Result type for training operations
pub type Result<T> = std::result::Result<T, TrainError>;

/// An interrupted fit ends the trial as pruned; any other error fails it.
impl From<TrainError> for TrialError {
    fn from(err: TrainError) -> Self {
        match err {
            TrainError::Interrupted(interrupt) => {
                TrialError::Pruned(TrialPruned::new(interrupt.message))
            }
            other => TrialError::Failed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_error_display() {
        let err = TrainError::Interrupted(Interrupt::new("PruningCallback", 1, "pruned"));
        assert_eq!(err.to_string(), "Training interrupted by PruningCallback: pruned");
        assert!(err.is_interrupt());

        assert!(TrainError::EmptyDataset.to_string().contains("Empty"));
        assert!(!TrainError::Step("nan loss".to_string()).is_interrupt());
    }

    #[test]
    fn test_interrupt_maps_to_pruned_trial() {
        let err = TrainError::Interrupted(Interrupt::new(
            "PruningCallback",
            0,
            "Trial was pruned at epoch 0.",
        ));
        match TrialError::from(err) {
            TrialError::Pruned(p) => assert_eq!(p.message(), "Trial was pruned at epoch 0."),
            other => panic!("expected pruned, got {other:?}"),
        }
    }

    #[test]
    fn test_other_errors_map_to_failed_trial() {
        let err = TrialError::from(TrainError::Step("exploded".to_string()));
        assert!(matches!(err, TrialError::Failed(msg) if msg.contains("exploded")));
    }
}

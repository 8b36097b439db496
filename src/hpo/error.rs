//! HPO error types

use thiserror::Error;

use super::types::TrialState;

/// HPO errors
#[derive(Debug, Error)]
pub enum HPOError {
    #[error("Invalid parameter value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Invalid domain for {0}: {1}")]
    InvalidDomain(String, String),

    #[error("Trial {number} is not running (state: {state:?})")]
    TrialNotRunning { number: usize, state: TrialState },

    #[error("Step {step} reported after step {last} for trial {number}")]
    StepRegression { number: usize, step: usize, last: usize },

    #[error("No trials completed")]
    NoTrials,

    #[error("Trial {number} failed: {message}")]
    TrialFailed { number: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for HPO operations
pub type Result<T> = std::result::Result<T, HPOError>;

/// Signal raised from inside an objective to end the trial as pruned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TrialPruned {
    message: String,
}

impl TrialPruned {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for TrialPruned {
    fn default() -> Self {
        Self::new("Trial was pruned.")
    }
}

/// Outcome of an objective that did not produce a value
#[derive(Debug, Error)]
pub enum TrialError {
    /// Expected early termination; recorded as `TrialState::Pruned`
    #[error(transparent)]
    Pruned(#[from] TrialPruned),

    /// Anything else; recorded as `TrialState::Failed`
    #[error("{0}")]
    Failed(String),
}

impl TrialError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn is_pruned(&self) -> bool {
        matches!(self, TrialError::Pruned(_))
    }
}

impl From<HPOError> for TrialError {
    fn from(err: HPOError) -> Self {
        Self::Failed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hpo_error_display() {
        let err = HPOError::InvalidValue("lr".to_string(), "invalid".to_string());
        assert!(format!("{}", err).contains("Invalid parameter value"));
        assert!(format!("{}", err).contains("lr"));

        let err = HPOError::StepRegression { number: 3, step: 1, last: 4 };
        assert!(format!("{}", err).contains("Step 1 reported after step 4"));

        let err = HPOError::TrialNotRunning { number: 0, state: TrialState::Pruned };
        assert!(format!("{}", err).contains("Pruned"));

        let err = HPOError::NoTrials;
        assert!(format!("{}", err).contains("No trials completed"));

        let err = HPOError::TrialFailed { number: 2, message: "boom".to_string() };
        assert!(format!("{}", err).contains("Trial 2 failed: boom"));
    }

    #[test]
    fn test_trial_pruned_into_trial_error() {
        let err: TrialError = TrialPruned::new("pruned at epoch 0").into();
        assert!(err.is_pruned());
        assert_eq!(err.to_string(), "pruned at epoch 0");
    }

    #[test]
    fn test_hpo_error_into_trial_error_is_failure() {
        let err: TrialError = HPOError::NoTrials.into();
        assert!(!err.is_pruned());
        assert!(matches!(err, TrialError::Failed(msg) if msg.contains("No trials")));
    }

    #[test]
    fn test_trial_pruned_default_message() {
        assert_eq!(TrialPruned::default().message(), "Trial was pruned.");
    }
}

//! Trainer configuration

use serde::{Deserialize, Serialize};

use super::error::{Result, TrainError};

/// Training loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Upper bound on epochs
    pub max_epochs: usize,
    /// Graceful stop requests are ignored until this many epochs ran
    pub min_epochs: usize,
    /// Validation batches run before training as a sanity check (0 disables)
    pub num_sanity_val_steps: usize,
    /// Run validation every n epochs
    pub check_val_every_n_epoch: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self { max_epochs: 1000, min_epochs: 0, num_sanity_val_steps: 2, check_val_every_n_epoch: 1 }
    }
}

impl TrainConfig {
    pub fn with_max_epochs(mut self, n: usize) -> Self {
        self.max_epochs = n;
        self
    }

    pub fn with_min_epochs(mut self, n: usize) -> Self {
        self.min_epochs = n;
        self
    }

    pub fn with_sanity_val_steps(mut self, n: usize) -> Self {
        self.num_sanity_val_steps = n;
        self
    }

    pub fn with_check_val_every_n_epoch(mut self, n: usize) -> Self {
        self.check_val_every_n_epoch = n;
        self
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_epochs > self.max_epochs {
            return Err(TrainError::InvalidConfig(format!(
                "min_epochs ({}) exceeds max_epochs ({})",
                self.min_epochs, self.max_epochs
            )));
        }
        if self.check_val_every_n_epoch == 0 {
            return Err(TrainError::InvalidConfig(
                "check_val_every_n_epoch must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

//! Declarative YAML configuration for studies
//!
//! A config names the monitored metric, the study (direction, trial count,
//! pruner) and the trainer settings used for every trial.

use std::path::PathBuf;

use thiserror::Error;

mod loader;
mod schema;
pub mod validate;

pub use loader::{load_config, parse_config};
pub use schema::{PodarConfig, PrunerConfig, StudyConfig};
pub use validate::{validate_config, ValidationError};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ValidationError),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

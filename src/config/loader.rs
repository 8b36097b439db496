//! Loading run configuration from YAML

use std::fs;
use std::path::Path;

use tracing::debug;

use super::schema::PodarConfig;
use super::validate::validate_config;
use super::{ConfigError, Result};

/// Read, parse and validate a YAML configuration file
///
/// # Example
///
/// ```no_run
/// use podar::config::load_config;
///
/// let config = load_config("study.yaml")?;
/// println!("{} trials", config.study.n_trials);
/// # Ok::<(), podar::config::ConfigError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PodarConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let config = parse_config(&yaml)?;
    debug!(path = %path.display(), pruner = config.study.pruner.kind(), "config loaded");
    Ok(config)
}

/// Parse and validate configuration from a YAML string
pub fn parse_config(yaml: &str) -> Result<PodarConfig> {
    let config: PodarConfig = serde_yaml::from_str(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

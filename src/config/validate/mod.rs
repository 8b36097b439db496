//! Configuration validation
//!
//! Validates run configurations for correctness before any trial starts.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::validate_config;

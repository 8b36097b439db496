//! Parameter value and domain types

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::hpo::error::{HPOError, Result};

/// Parameter value (sampled from domain)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Float(f64),
    Int(i64),
    Categorical(String),
}

impl ParameterValue {
    /// Get as float (converts int to float if needed)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParameterValue::Float(v) => Some(*v),
            ParameterValue::Int(v) => Some(*v as f64),
            ParameterValue::Categorical(_) => None,
        }
    }

    /// Get as int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParameterValue::Int(v) => Some(*v),
            ParameterValue::Float(v) => Some(*v as i64),
            ParameterValue::Categorical(_) => None,
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::Categorical(s) => Some(s),
            _ => None,
        }
    }
}

/// Parameter domain (search space)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterDomain {
    /// Continuous range [low, high], optionally log-scaled
    Continuous { low: f64, high: f64, log_scale: bool },
    /// Discrete integer range [low, high]
    Discrete { low: i64, high: i64 },
    /// Categorical choices
    Categorical { choices: Vec<String> },
}

impl ParameterDomain {
    /// Reject domains that cannot be sampled from
    pub fn check(&self, name: &str) -> Result<()> {
        let invalid = |msg: String| Err(HPOError::InvalidDomain(name.to_string(), msg));
        match self {
            ParameterDomain::Continuous { low, high, log_scale } => {
                if !low.is_finite() || !high.is_finite() || low > high {
                    return invalid(format!("low={low} must not exceed high={high}"));
                }
                if *log_scale && *low <= 0.0 {
                    return invalid(format!("log scale requires low > 0, got {low}"));
                }
                Ok(())
            }
            ParameterDomain::Discrete { low, high } if low > high => {
                invalid(format!("low={low} must not exceed high={high}"))
            }
            ParameterDomain::Categorical { choices } if choices.is_empty() => {
                invalid("no choices".to_string())
            }
            _ => Ok(()),
        }
    }

    /// Sample a random value from this domain
    ///
    /// The domain must have passed [`ParameterDomain::check`].
    pub fn sample<R: Rng>(&self, rng: &mut R) -> ParameterValue {
        match self {
            ParameterDomain::Continuous { low, high, log_scale } => {
                let value = if *log_scale {
                    let log_low = low.ln();
                    let log_high = high.ln();
                    (log_low + rng.random::<f64>() * (log_high - log_low)).exp()
                } else {
                    low + rng.random::<f64>() * (high - low)
                };
                ParameterValue::Float(value.clamp(*low, *high))
            }
            ParameterDomain::Discrete { low, high } => {
                ParameterValue::Int(rng.random_range(*low..=*high))
            }
            ParameterDomain::Categorical { choices } => {
                let idx = rng.random_range(0..choices.len());
                ParameterValue::Categorical(choices[idx].clone())
            }
        }
    }

    /// Check if a value is valid for this domain
    pub fn is_valid(&self, value: &ParameterValue) -> bool {
        match (self, value) {
            (ParameterDomain::Continuous { low, high, .. }, ParameterValue::Float(v)) => {
                *v >= *low && *v <= *high
            }
            (ParameterDomain::Discrete { low, high }, ParameterValue::Int(v)) => {
                *v >= *low && *v <= *high
            }
            (ParameterDomain::Categorical { choices }, ParameterValue::Categorical(s)) => {
                choices.contains(s)
            }
            _ => false,
        }
    }
}

//! Core HPO types

mod direction;
mod float;
mod parameter;
mod trial;

#[cfg(test)]
mod tests;

pub use direction::StudyDirection;
pub use parameter::{ParameterDomain, ParameterValue};
pub use trial::{FrozenTrial, TrialState};

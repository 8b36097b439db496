//! Trial record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::parameter::ParameterValue;

/// Trial state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialState {
    Running,
    Complete,
    Pruned,
    Failed,
}

impl TrialState {
    /// Whether the trial reached a terminal state
    pub fn is_finished(self) -> bool {
        !matches!(self, TrialState::Running)
    }
}

/// Snapshot of a single trial (configuration, reports and outcome)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrozenTrial {
    /// Trial number, 0-based within the study
    pub number: usize,
    /// Trial state
    pub state: TrialState,
    /// Objective value; for pruned trials, the last intermediate value
    #[serde(default, with = "super::float::option")]
    pub value: Option<f64>,
    /// Sampled parameter configuration
    pub params: BTreeMap<String, ParameterValue>,
    /// Intermediate values keyed by step
    #[serde(with = "super::float::step_map")]
    pub intermediate_values: BTreeMap<usize, f64>,
    /// Milliseconds since study creation when the trial started
    pub started_ms: u64,
    /// Milliseconds since study creation when the trial finished
    pub finished_ms: Option<u64>,
}

impl FrozenTrial {
    /// Create a new running trial
    pub fn new(number: usize, started_ms: u64) -> Self {
        Self {
            number,
            state: TrialState::Running,
            value: None,
            params: BTreeMap::new(),
            intermediate_values: BTreeMap::new(),
            started_ms,
            finished_ms: None,
        }
    }

    /// Latest reported step
    pub fn last_step(&self) -> Option<usize> {
        self.intermediate_values.keys().next_back().copied()
    }

    /// Value reported at the latest step
    pub fn last_value(&self) -> Option<f64> {
        self.intermediate_values.values().next_back().copied()
    }

    /// Wall time of the trial, if finished
    pub fn duration_ms(&self) -> Option<u64> {
        self.finished_ms.map(|end| end.saturating_sub(self.started_ms))
    }

    pub(crate) fn finish(&mut self, state: TrialState, value: Option<f64>, finished_ms: u64) {
        self.state = state;
        self.value = value;
        self.finished_ms = Some(finished_ms);
    }
}

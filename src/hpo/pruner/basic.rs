//! Pruners with fixed decisions

use serde::{Deserialize, Serialize};

use super::{PruneContext, Pruner};
use crate::hpo::types::FrozenTrial;

/// Never prunes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NopPruner;

impl Pruner for NopPruner {
    fn prune(&self, _ctx: &PruneContext<'_>, _trial: &FrozenTrial) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "NopPruner"
    }
}

/// Always returns the configured decision
///
/// Useful to drive a training loop down the pruned or completed path
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicPruner {
    is_pruning: bool,
}

impl DeterministicPruner {
    pub fn new(is_pruning: bool) -> Self {
        Self { is_pruning }
    }
}

impl Pruner for DeterministicPruner {
    fn prune(&self, _ctx: &PruneContext<'_>, _trial: &FrozenTrial) -> bool {
        self.is_pruning
    }

    fn name(&self) -> &'static str {
        "DeterministicPruner"
    }
}

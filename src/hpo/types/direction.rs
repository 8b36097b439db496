//! Optimization direction

use serde::{Deserialize, Serialize};

/// Whether the objective is minimized or maximized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyDirection {
    #[default]
    Minimize,
    Maximize,
}

impl StudyDirection {
    /// Whether `candidate` is strictly better than `incumbent`
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            StudyDirection::Minimize => candidate < incumbent,
            StudyDirection::Maximize => candidate > incumbent,
        }
    }

    /// Best of a set of values, ignoring NaN. NaN when no finite comparison exists.
    pub fn best_of(self, values: impl IntoIterator<Item = f64>) -> f64 {
        values.into_iter().filter(|v| !v.is_nan()).fold(f64::NAN, |best, v| {
            if best.is_nan() || self.is_better(v, best) {
                v
            } else {
                best
            }
        })
    }
}

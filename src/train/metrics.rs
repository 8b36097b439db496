//! Named scalar metrics produced by the training loop

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from metric name to scalar value
///
/// Produced once per validation cycle. Lookups return `Option`; a missing
/// metric is an ordinary outcome for consumers to handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    values: BTreeMap<String, f64>,
}

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) a metric
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Overwrite entries with those of `other`
    pub fn merge(&mut self, other: &MetricSnapshot) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }

    /// Per-name mean over a set of snapshots
    ///
    /// Each name is averaged over the snapshots that contain it.
    pub fn mean_of(snapshots: &[MetricSnapshot]) -> MetricSnapshot {
        let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for snapshot in snapshots {
            for (name, value) in snapshot.iter() {
                let entry = sums.entry(name).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }
        sums.into_iter().map(|(name, (sum, n))| (name.to_string(), sum / n as f64)).collect()
    }
}

impl FromIterator<(String, f64)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_get_missing_metric_is_none() {
        let snapshot = MetricSnapshot::new().with("accuracy", 0.5);
        assert_eq!(snapshot.get("accuracy"), Some(0.5));
        assert_eq!(snapshot.get("InvalidMonitor"), None);
        assert!(!snapshot.contains("InvalidMonitor"));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = MetricSnapshot::new().with("loss", 1.0).with("accuracy", 0.1);
        base.merge(&MetricSnapshot::new().with("accuracy", 0.9));
        assert_eq!(base.get("loss"), Some(1.0));
        assert_eq!(base.get("accuracy"), Some(0.9));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_mean_of_per_name() {
        let outputs = vec![
            MetricSnapshot::new().with("acc", 1.0).with("loss", 0.2),
            MetricSnapshot::new().with("acc", 0.0),
            MetricSnapshot::new().with("acc", 0.5),
        ];
        let mean = MetricSnapshot::mean_of(&outputs);
        assert_relative_eq!(mean.get("acc").expect("acc"), 0.5);
        assert_relative_eq!(mean.get("loss").expect("loss"), 0.2);
    }

    #[test]
    fn test_mean_of_empty() {
        assert!(MetricSnapshot::mean_of(&[]).is_empty());
    }

    #[test]
    fn test_from_iter_and_names() {
        let snapshot: MetricSnapshot = [("b", 2.0), ("a", 1.0)].into_iter().collect();
        assert_eq!(snapshot.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_nan_is_stored_as_is() {
        let snapshot = MetricSnapshot::new().with("accuracy", f64::NAN);
        assert!(snapshot.get("accuracy").expect("present").is_nan());
    }
}

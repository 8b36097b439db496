//! Batch data structure

use ndarray::{Array1, Array2};

/// A batch of feature rows and class targets
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Input features, one row per sample
    pub inputs: Array2<f32>,
    /// Target class index per sample
    pub targets: Array1<usize>,
}

impl Batch {
    /// Create a new batch
    pub fn new(inputs: Array2<f32>, targets: Array1<usize>) -> Self {
        debug_assert_eq!(inputs.nrows(), targets.len(), "one target per input row");
        Self { inputs, targets }
    }

    /// Number of samples
    pub fn size(&self) -> usize {
        self.inputs.nrows()
    }

    /// Split samples into batches of at most `batch_size` rows
    pub fn chunked(inputs: &Array2<f32>, targets: &Array1<usize>, batch_size: usize) -> Vec<Batch> {
        let batch_size = batch_size.max(1);
        (0..inputs.nrows())
            .step_by(batch_size)
            .map(|start| {
                let end = (start + batch_size).min(inputs.nrows());
                Batch::new(
                    inputs.slice(ndarray::s![start..end, ..]).to_owned(),
                    targets.slice(ndarray::s![start..end]).to_owned(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_creation() {
        let batch = Batch::new(Array2::zeros((3, 4)), Array1::zeros(3));
        assert_eq!(batch.size(), 3);
    }

    #[test]
    fn test_chunked_batch_size_one() {
        let batches = Batch::chunked(&Array2::zeros((3, 4)), &Array1::zeros(3), 1);
        assert_eq!(batches.len(), 3);
        assert!(batches.iter().all(|b| b.size() == 1 && b.inputs.ncols() == 4));
    }

    #[test]
    fn test_chunked_uneven_tail() {
        let batches = Batch::chunked(&Array2::zeros((5, 2)), &Array1::zeros(5), 2);
        assert_eq!(batches.iter().map(Batch::size).collect::<Vec<_>>(), vec![2, 2, 1]);
    }
}

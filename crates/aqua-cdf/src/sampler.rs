//! Decimated empirical CDF sampling
//!
//! Plotting every one of tens of thousands of Monte-Carlo draws adds nothing
//! to the curve's shape, so the sampler keeps every `stride`-th sorted value
//! and pairs it with the percentage of the sample that precedes it.

use crate::types::CdfPoint;
use aqua_core::{validate, Result};
use tracing::debug;

/// Empirical CDF sampler over pre-sorted data
///
/// Sortedness is the caller's contract. Unsorted input yields a
/// non-monotonic curve unless [`CdfSampler::validate_sorted`] is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdfSampler {
    stride: usize,
    validate_sorted: bool,
}

impl CdfSampler {
    /// Keep every `stride`-th point
    pub fn new(stride: usize) -> Self {
        Self {
            stride,
            validate_sorted: false,
        }
    }

    /// Reject unsorted input with `InvalidArgument` instead of plotting it
    pub fn validate_sorted(mut self, validate: bool) -> Self {
        self.validate_sorted = validate;
        self
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of points emitted for `n` samples: `ceil(n / stride)`
    pub fn output_len(&self, n: usize) -> usize {
        if self.stride == 0 {
            0
        } else {
            n.div_ceil(self.stride)
        }
    }

    /// Emit `(sorted[i], i / n * 100)` for every `stride`-th index `i`
    pub fn sample(&self, sorted: &[f64]) -> Result<Vec<CdfPoint>> {
        validate::ensure_positive("stride", self.stride)?;
        validate::ensure_non_empty(sorted, "CDF sampling")?;
        validate::ensure_finite(sorted, "CDF sample")?;
        if self.validate_sorted {
            validate::ensure_sorted(sorted, "CDF sample")?;
        }

        let n = sorted.len() as f64;
        let points: Vec<CdfPoint> = sorted
            .iter()
            .enumerate()
            .step_by(self.stride)
            .map(|(i, &value)| CdfPoint::new(value, i as f64 / n * 100.0))
            .collect();

        debug!(
            samples = sorted.len(),
            stride = self.stride,
            points = points.len(),
            "sampled empirical CDF"
        );
        Ok(points)
    }

    /// Sort a copy of `data` ascending, then sample it
    pub fn sample_unsorted(&self, data: &[f64]) -> Result<Vec<CdfPoint>> {
        validate::ensure_finite(data, "CDF sample")?;
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.sample(&sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_point_with_unit_stride() {
        let points = CdfSampler::new(1).sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let pairs: Vec<(f64, f64)> = points.into_iter().map(Into::into).collect();
        assert_eq!(
            pairs,
            vec![(1.0, 0.0), (2.0, 20.0), (3.0, 40.0), (4.0, 60.0), (5.0, 80.0)]
        );
    }

    #[test]
    fn test_stride_keeps_first_point() {
        let data: Vec<f64> = (0..7).map(f64::from).collect();
        let points = CdfSampler::new(3).sample(&data).unwrap();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0.0, 3.0, 6.0]);
        assert_eq!(CdfSampler::new(3).output_len(7), 3);
    }

    #[test]
    fn test_stride_larger_than_input() {
        let points = CdfSampler::new(50).sample(&[2.0, 3.0]).unwrap();
        assert_eq!(points, vec![CdfPoint::new(2.0, 0.0)]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(CdfSampler::new(1).sample(&[]).unwrap_err().is_invalid_argument());
        assert!(CdfSampler::new(0).sample(&[1.0]).unwrap_err().is_invalid_argument());
        assert!(CdfSampler::new(1)
            .sample(&[1.0, f64::INFINITY])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_unsorted_input_is_a_caller_contract() {
        let data = [3.0, 1.0, 2.0];
        let lenient = CdfSampler::new(1).sample(&data).unwrap();
        assert_eq!(lenient[0].value, 3.0);

        let err = CdfSampler::new(1)
            .validate_sorted(true)
            .sample(&data)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sample_unsorted_sorts_first() {
        let points = CdfSampler::new(1).sample_unsorted(&[3.0, 1.0, 2.0]).unwrap();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }
}

//! Equal-width histogram construction

use crate::labels::{BinLabeler, RangeLabel};
use crate::traits::HistogramBuilder;
use crate::types::{bin_index, equal_width, Histogram, HistogramBin};
use aqua_core::{validate, Result};
use tracing::{debug, trace};

/// Equal-width histogram builder
///
/// Splits `[min(data), max(data)]` into `num_bins` bins of width
/// `(max - min) / num_bins`. Bins are half-open except the last, which also
/// holds the maximum. Labels come from the configured [`BinLabeler`].
#[derive(Debug, Clone)]
pub struct EqualWidthBuilder<L = RangeLabel> {
    num_bins: usize,
    labeler: L,
}

impl EqualWidthBuilder {
    /// Create a builder with `"{start}-{end}"` labels at two decimals
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            labeler: RangeLabel::default(),
        }
    }
}

impl<L: BinLabeler> EqualWidthBuilder<L> {
    /// Replace the label strategy
    pub fn with_labeler<M: BinLabeler>(self, labeler: M) -> EqualWidthBuilder<M> {
        EqualWidthBuilder {
            num_bins: self.num_bins,
            labeler,
        }
    }

    /// Number of bins the builder produces
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// The label strategy in use
    pub fn labeler(&self) -> &L {
        &self.labeler
    }
}

impl<L: BinLabeler> HistogramBuilder for EqualWidthBuilder<L> {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        validate::ensure_positive("number of bins", self.num_bins)?;
        validate::ensure_non_empty(sample, "histogram binning")?;
        validate::ensure_finite(sample, "histogram sample")?;

        let (min, max) = validate::min_max(sample)?;
        let n = self.num_bins;
        let overflow = !(max - min).is_finite();
        let width = equal_width(min, max, n);

        if width == 0.0 {
            debug!(samples = sample.len(), value = min, "constant sample, all values in bin 0");
        }

        let mut counts = vec![0usize; n];
        for &value in sample {
            counts[bin_index(value, min, width, n)] += 1;
        }

        let bins: Vec<HistogramBin> = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let start = bin_edge(min, max, width, i, n, overflow);
                // Pin the closed edge to the observed maximum
                let end = if i == n - 1 {
                    max
                } else {
                    bin_edge(min, max, width, i + 1, n, overflow)
                };
                HistogramBin::new(start, end, count, self.labeler.label(start, end))
            })
            .collect();

        trace!(?bins, "histogram bins");
        debug!(samples = sample.len(), bins = n, min, max, width, "built equal-width histogram");

        Ok(Histogram::new(bins, sample.len(), min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Left edge of bin `i`, interpolated between the extremes when `min + i * width` could overflow
fn bin_edge(min: f64, max: f64, width: f64, i: usize, n: usize, overflow: bool) -> f64 {
    if overflow {
        let t = i as f64 / n as f64;
        min * (1.0 - t) + max * t
    } else {
        min + i as f64 * width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::StartLabel;

    #[test]
    fn test_two_bins_over_zero_to_ten() {
        let hist = EqualWidthBuilder::new(2).build(&[0.0, 10.0]).unwrap();

        assert_eq!(hist.len(), 2);
        assert_eq!(hist.bins()[0].start, 0.0);
        assert_eq!(hist.bins()[0].end, 5.0);
        assert_eq!(hist.bins()[1].start, 5.0);
        assert_eq!(hist.bins()[1].end, 10.0);
        assert_eq!(hist.labels(), vec!["0.00-5.00", "5.00-10.00"]);
        assert_eq!(hist.counts(), vec![1, 1]);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let hist = EqualWidthBuilder::new(3).build(&data).unwrap();

        assert_eq!(hist.counts(), vec![3, 3, 4]);
        assert_eq!(hist.counts().iter().sum::<usize>(), data.len());
        assert_eq!(hist.bins().last().unwrap().end, 10.0);
    }

    #[test]
    fn test_constant_sample() {
        let hist = EqualWidthBuilder::new(10).build(&[5.0, 5.0, 5.0, 5.0]).unwrap();

        assert_eq!(hist.len(), 10);
        assert_eq!(hist.bin_width(), 0.0);
        assert_eq!(hist.bins()[0].count, 4);
        assert_eq!(hist.counts().iter().sum::<usize>(), 4);
        assert!(hist.bins().iter().all(|b| b.start == 5.0 && b.end == 5.0));
    }

    #[test]
    fn test_invalid_arguments() {
        let err = EqualWidthBuilder::new(4).build(&[]).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = EqualWidthBuilder::new(0).build(&[1.0, 2.0]).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = EqualWidthBuilder::new(3).build(&[1.0, f64::NAN]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_range_wider_than_f64_max() {
        let data = [-1e308, 0.0, 1e308];
        let hist = EqualWidthBuilder::new(4).build(&data).unwrap();

        assert!(hist.bin_width().is_finite());
        assert_eq!(hist.counts(), vec![1, 0, 1, 1]);
        assert_eq!(hist.find_bin(1e308), Some(3));
        assert_eq!(hist.find_bin(-1e308), Some(0));

        let edges = hist.edges();
        assert_eq!(edges.first(), Some(&-1e308));
        assert_eq!(edges.last(), Some(&1e308));
        assert!(edges.iter().all(|e| e.is_finite()));
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
        assert!(hist.centers().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_single_bin_over_full_range() {
        let hist = EqualWidthBuilder::new(1).build(&[f64::MIN, f64::MAX]).unwrap();
        assert_eq!(hist.counts(), vec![2]);
        assert_eq!(hist.edges(), vec![f64::MIN, f64::MAX]);
    }

    #[test]
    fn test_custom_labeler() {
        let builder = EqualWidthBuilder::new(4).with_labeler(StartLabel::new(1));
        let hist = builder.build(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(hist.labels(), vec!["0.0", "1.0", "2.0", "3.0"]);
        assert_eq!(builder.target_bins(), Some(4));
    }
}

//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub start: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub end: f64,
    /// Number of samples in this bin
    pub count: usize,
    /// Category-axis label
    pub label: String,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(start: f64, end: f64, count: usize, label: String) -> Self {
        Self {
            start,
            end,
            count,
            label,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        self.start / 2.0 + self.end / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}) {}: count={}",
            self.start, self.end, self.label, self.count
        )
    }
}

/// Equal-width histogram over `[min, max]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
    bin_width: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        let bin_width = if bins.is_empty() {
            0.0
        } else {
            equal_width(min, max, bins.len())
        };
        Self {
            bins,
            total_count,
            min,
            max,
            bin_width,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Consume the histogram, keeping only its bins
    pub fn into_bins(self) -> Vec<HistogramBin> {
        self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Common width of every bin; zero for constant input
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Index of the bin a value is assigned to, `None` outside `[min, max]`
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if self.bins.is_empty() || !(self.min..=self.max).contains(&value) {
            return None;
        }
        Some(bin_index(value, self.min, self.bin_width, self.bins.len()))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get labels as a vector
    pub fn labels(&self) -> Vec<String> {
        self.bins.iter().map(|bin| bin.label.clone()).collect()
    }

    /// Get frequencies as a vector
    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.frequency(self.total_count))
            .collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.start).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.end);
        }
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

/// Width of one of `num_bins` equal bins over `[min, max]`
///
/// Falls back to `max / n - min / n` when `max - min` exceeds `f64::MAX`.
pub fn equal_width(min: f64, max: f64, num_bins: usize) -> f64 {
    let n = num_bins as f64;
    let range = max - min;
    if range.is_finite() {
        range / n
    } else {
        max / n - min / n
    }
}

/// Bin assignment rule: `floor((value - min) / width)` clamped to the last bin
///
/// A zero width (constant input) sends everything to bin 0. When
/// `value - min` overflows, the offset is measured in widths directly.
pub fn bin_index(value: f64, min: f64, width: f64, num_bins: usize) -> usize {
    if width <= 0.0 || num_bins == 0 {
        return 0;
    }
    let offset = value - min;
    let ratio = if offset.is_finite() {
        offset / width
    } else {
        value / width - min / width
    };
    if ratio.is_nan() {
        return num_bins - 1;
    }
    let raw = ratio.floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(num_bins - 1)
    }
}

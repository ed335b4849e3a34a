//! Equal-width histogram binning for dashboard charts
//!
//! Raw sample arrays (profit margins, model residuals, water temperatures,
//! Monte-Carlo draws) are partitioned into a fixed number of equal-width
//! bins. The result carries per-bin counts and labels, ready for any bar
//! chart renderer.
//!
//! # Examples
//!
//! ```rust
//! use aqua_histogram::{EqualWidthBuilder, HistogramBuilder, ScaledLabel};
//!
//! let profits = vec![-4_000.0, 1_500.0, 12_000.0, 18_250.0, 31_000.0];
//! let histogram = EqualWidthBuilder::new(5)
//!     .with_labeler(ScaledLabel::thousands())
//!     .build(&profits)
//!     .unwrap();
//!
//! assert_eq!(histogram.counts().iter().sum::<usize>(), profits.len());
//! for bin in histogram.bins() {
//!     println!("{}: {}", bin.label, bin.count);
//! }
//! ```

pub mod builders;
pub mod labels;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::EqualWidthBuilder;
pub use labels::{BinLabeler, LabelFormat, RangeLabel, ScaledLabel, StartLabel};
pub use traits::HistogramBuilder;
pub use types::{bin_index, equal_width, Histogram, HistogramBin};

pub use aqua_core::Result;

/// Histogram with `num_bins` equal-width bins and `"{start}-{end}"` labels
pub fn histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    EqualWidthBuilder::new(num_bins).build(data)
}

/// Histogram with `num_bins` equal-width bins and caller-chosen labels
pub fn histogram_with_labels<L: BinLabeler>(
    data: &[f64],
    num_bins: usize,
    labeler: L,
) -> Result<Histogram> {
    EqualWidthBuilder::new(num_bins)
        .with_labeler(labeler)
        .build(data)
}

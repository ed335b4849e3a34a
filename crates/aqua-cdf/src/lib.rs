//! Empirical CDF sampling for line charts
//!
//! # Examples
//!
//! ```rust
//! use aqua_cdf::cdf;
//!
//! let sorted_profits: Vec<f64> = (0..10_000).map(|i| i as f64 * 2.5).collect();
//! let curve = cdf(&sorted_profits, 50).unwrap();
//! assert_eq!(curve.len(), 200);
//! assert_eq!(curve[0].percent, 0.0);
//! ```

pub mod rank;
pub mod sampler;
pub mod types;

pub use rank::ranked_series;
pub use sampler::CdfSampler;
pub use types::{CdfPoint, RankedPoint};

pub use aqua_core::Result;

/// Sample every `stride`-th point of pre-sorted data
pub fn cdf(sorted_data: &[f64], stride: usize) -> Result<Vec<CdfPoint>> {
    CdfSampler::new(stride).sample(sorted_data)
}

/// Sort a copy of `data`, then sample every `stride`-th point
pub fn cdf_from_unsorted(data: &[f64], stride: usize) -> Result<Vec<CdfPoint>> {
    CdfSampler::new(stride).sample_unsorted(data)
}

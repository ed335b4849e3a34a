//! Sorted-order series for "levels across all readings" line charts

use crate::types::RankedPoint;
use aqua_core::{validate, Result};

/// Sort `data` ascending and pair each value with its 1-based rank
pub fn ranked_series(data: &[f64]) -> Result<Vec<RankedPoint>> {
    validate::ensure_non_empty(data, "ranked series")?;
    validate::ensure_finite(data, "ranked series")?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(i, value)| RankedPoint { rank: i + 1, value })
        .collect())
}

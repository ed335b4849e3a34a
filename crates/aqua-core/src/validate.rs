//! Input validation shared by the aggregators
//!
//! Every aggregator checks its input up front so that the arithmetic that
//! follows never sees an empty slice, a zero count or a non-finite sample.

use crate::{Error, Result};

/// Fail with `InvalidArgument` if `data` is empty
pub fn ensure_non_empty<T>(data: &[T], operation: &str) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(())
}

/// Fail with `InvalidArgument` if any sample is NaN or infinite
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Fail with `InvalidArgument` if a count parameter is zero
pub fn ensure_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::zero_parameter(name));
    }
    Ok(())
}

/// Fail with `InvalidArgument` at the first descending pair
pub fn ensure_sorted(data: &[f64], context: &str) -> Result<()> {
    if let Some(i) = data.windows(2).position(|w| w[1] < w[0]) {
        return Err(Error::InvalidArgument(format!(
            "{context} is not sorted ascending at index {}: {} > {}",
            i + 1,
            data[i],
            data[i + 1]
        )));
    }
    Ok(())
}

/// Minimum and maximum of a non-empty slice in one pass
pub fn min_max(data: &[f64]) -> Result<(f64, f64)> {
    let (first, rest) = data
        .split_first()
        .ok_or_else(|| Error::empty_input("min/max"))?;
    Ok(rest
        .iter()
        .fold((*first, *first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
}

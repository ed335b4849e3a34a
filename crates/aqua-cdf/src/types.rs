//! Point types produced by the samplers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One point of a plotted empirical CDF
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdfPoint {
    /// Sample value (x axis)
    pub value: f64,
    /// Share of the sample strictly before this index, in percent (y axis)
    pub percent: f64,
}

impl CdfPoint {
    pub fn new(value: f64, percent: f64) -> Self {
        Self { value, percent }
    }

    /// Percent as a fraction in `[0, 1]`
    pub fn probability(&self) -> f64 {
        self.percent / 100.0
    }
}

impl From<CdfPoint> for (f64, f64) {
    fn from(p: CdfPoint) -> Self {
        (p.value, p.percent)
    }
}

impl fmt::Display for CdfPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.1}%)", self.value, self.percent)
    }
}

/// A value paired with its 1-based position in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedPoint {
    pub rank: usize,
    pub value: f64,
}

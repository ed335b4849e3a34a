//! Diverging two-hue colour scale for correlation cells

use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB colour with a floating-point alpha in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same hue with a different alpha (clamped to `[0, 1]`)
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

impl fmt::Display for Rgba {
    /// CSS `rgba(r, g, b, a)` notation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Maps a coefficient in `[-1, 1]` to one of two hues with alpha `|value|`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergingScale {
    /// Hue for non-negative coefficients
    pub positive: Rgba,
    /// Hue for negative coefficients
    pub negative: Rgba,
}

impl Default for DivergingScale {
    fn default() -> Self {
        Self {
            positive: Rgba::rgb(6, 214, 160),
            negative: Rgba::rgb(214, 40, 40),
        }
    }
}

impl DivergingScale {
    pub fn new(positive: Rgba, negative: Rgba) -> Self {
        Self { positive, negative }
    }

    /// Intensity of a coefficient: `|value|` clamped to `[0, 1]`; NaN maps to 0
    pub fn intensity(value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.abs().min(1.0)
        }
    }

    /// Fill colour for a coefficient; zero is fully transparent
    pub fn color(&self, value: f64) -> Rgba {
        let hue = if value < 0.0 { self.negative } else { self.positive };
        hue.with_alpha(Self::intensity(value))
    }
}

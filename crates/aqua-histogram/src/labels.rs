//! Bin label strategies
//!
//! Different charts label the same kind of bin differently: some show the
//! full interval, some only its start, some a scaled currency amount. The
//! builder takes any [`BinLabeler`] so the counting logic stays in one place.

use serde::{Deserialize, Serialize};

/// Turns a bin's boundaries into the label shown on the category axis
pub trait BinLabeler {
    /// Label for the bin `[start, end)` (closed for the last bin)
    fn label(&self, start: f64, end: f64) -> String;
}

impl<F> BinLabeler for F
where
    F: Fn(f64, f64) -> String,
{
    fn label(&self, start: f64, end: f64) -> String {
        self(start, end)
    }
}

/// `"{start}-{end}"` at a fixed number of decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeLabel {
    pub precision: usize,
}

impl RangeLabel {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for RangeLabel {
    fn default() -> Self {
        Self::new(2)
    }
}

impl BinLabeler for RangeLabel {
    fn label(&self, start: f64, end: f64) -> String {
        let p = self.precision;
        format!("{start:.p$}-{end:.p$}")
    }
}

/// `"{start}"` at a fixed number of decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartLabel {
    pub precision: usize,
}

impl StartLabel {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl BinLabeler for StartLabel {
    fn label(&self, start: f64, _end: f64) -> String {
        let p = self.precision;
        format!("{start:.p$}")
    }
}

/// Bin start divided by `divisor`, wrapped in a prefix and suffix
///
/// With the default settings a bin starting at 12 400 is labelled `"$12k"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledLabel {
    pub prefix: String,
    pub divisor: f64,
    pub precision: usize,
    pub suffix: String,
}

impl ScaledLabel {
    /// Thousands of dollars with no decimals
    pub fn thousands() -> Self {
        Self {
            prefix: "$".to_string(),
            divisor: 1000.0,
            precision: 0,
            suffix: "k".to_string(),
        }
    }
}

impl Default for ScaledLabel {
    fn default() -> Self {
        Self::thousands()
    }
}

impl BinLabeler for ScaledLabel {
    fn label(&self, start: f64, _end: f64) -> String {
        let p = self.precision;
        // A zero divisor would print "inf"; fall back to the raw value.
        let scaled = if self.divisor != 0.0 { start / self.divisor } else { start };
        format!("{}{scaled:.p$}{}", self.prefix, self.suffix)
    }
}

/// Serializable choice of label strategy, used by dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum LabelFormat {
    Range(RangeLabel),
    Start(StartLabel),
    Scaled(ScaledLabel),
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::Range(RangeLabel::default())
    }
}

impl BinLabeler for LabelFormat {
    fn label(&self, start: f64, end: f64) -> String {
        match self {
            Self::Range(l) => l.label(start, end),
            Self::Start(l) => l.label(start, end),
            Self::Scaled(l) => l.label(start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label_precision() {
        assert_eq!(RangeLabel::new(2).label(0.0, 5.0), "0.00-5.00");
        assert_eq!(RangeLabel::new(1).label(12.34, 15.06), "12.3-15.1");
        assert_eq!(RangeLabel::new(0).label(1.4, 2.6), "1-3");
    }

    #[test]
    fn test_start_label() {
        assert_eq!(StartLabel::new(3).label(-0.12345, 0.5), "-0.123");
    }

    #[test]
    fn test_scaled_label() {
        let l = ScaledLabel::thousands();
        assert_eq!(l.label(12_400.0, 14_000.0), "$12k");
        assert_eq!(l.label(-3_600.0, 0.0), "$-4k");

        let raw = ScaledLabel { divisor: 0.0, ..ScaledLabel::thousands() };
        assert_eq!(raw.label(7.0, 8.0), "$7k");
    }

    #[test]
    fn test_closure_labeler() {
        let l = |start: f64, end: f64| format!("[{start}, {end})");
        assert_eq!(l.label(1.0, 2.0), "[1, 2)");
    }

    #[test]
    fn test_label_format_deserialize() {
        let f: LabelFormat = serde_json::from_str(r#"{"style":"start","precision":1}"#).unwrap();
        assert_eq!(f, LabelFormat::Start(StartLabel::new(1)));
        assert_eq!(f.label(2.25, 3.0), "2.2");

        let f: LabelFormat = serde_json::from_str(
            r#"{"style":"scaled","prefix":"","divisor":1000000.0,"precision":1,"suffix":"M"}"#,
        )
        .unwrap();
        assert_eq!(f.label(2_500_000.0, 3_000_000.0), "2.5M");
    }
}

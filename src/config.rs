//! Dashboard configuration
//!
//! One entry per chart, keyed by the chart's element id. The defaults
//! describe the aquaculture dashboard as deployed; a JSON document can
//! override any part of it.

use aqua_core::{Error, Result};
use aqua_heatmap::HeatmapStyle;
use aqua_histogram::{LabelFormat, RangeLabel, ScaledLabel, StartLabel};
use serde::{Deserialize, Serialize};

/// A bar chart fed by the histogram binner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramChart {
    pub id: String,
    pub title: String,
    pub bins: usize,
    /// Multiplier applied to every sample before binning (e.g. 100 for fractions shown as percent)
    pub scale: f64,
    pub labels: LabelFormat,
}

impl Default for HistogramChart {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            bins: 10,
            scale: 1.0,
            labels: LabelFormat::default(),
        }
    }
}

impl HistogramChart {
    pub fn new(id: &str, title: &str, bins: usize, labels: LabelFormat) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            bins,
            labels,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// A line chart fed by the CDF sampler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdfChart {
    pub id: String,
    pub title: String,
    pub stride: usize,
    /// Reject unsorted input instead of plotting it
    pub validate_sorted: bool,
}

impl Default for CdfChart {
    fn default() -> Self {
        Self {
            id: "cdfChart".to_string(),
            title: "Cumulative Probability".to_string(),
            stride: 50,
            validate_sorted: false,
        }
    }
}

/// A line chart of readings in ascending order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedChart {
    pub id: String,
    pub title: String,
}

/// The correlation heatmap canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapChart {
    pub id: String,
    pub variables: Vec<String>,
    pub width: f64,
    pub height: f64,
    pub style: HeatmapStyle,
}

impl Default for HeatmapChart {
    fn default() -> Self {
        Self {
            id: "correlationHeatmap".to_string(),
            variables: ["Growth", "Survival", "FCR", "Profit", "Density"]
                .map(String::from)
                .to_vec(),
            width: 500.0,
            height: 500.0,
            style: HeatmapStyle::default(),
        }
    }
}

/// Every chart on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub histograms: Vec<HistogramChart>,
    pub cdf: CdfChart,
    pub ranked: Vec<RankedChart>,
    pub heatmap: HeatmapChart,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let percent = ScaledLabel {
            prefix: String::new(),
            divisor: 1.0,
            precision: 0,
            suffix: "%".to_string(),
        };
        Self {
            histograms: vec![
                HistogramChart::new(
                    "profitDistributionChart",
                    "Number of Sites",
                    12,
                    LabelFormat::Range(RangeLabel::new(2)),
                ),
                HistogramChart::new(
                    "olsResidualsChart",
                    "OLS Residuals",
                    15,
                    LabelFormat::Start(StartLabel::new(3)),
                ),
                HistogramChart::new(
                    "glsarResidualsChart",
                    "GLSAR Residuals",
                    15,
                    LabelFormat::Start(StartLabel::new(3)),
                ),
                HistogramChart::new(
                    "profitHistogram",
                    "Simulated Profit",
                    30,
                    LabelFormat::Scaled(ScaledLabel::thousands()),
                ),
                HistogramChart::new("roiHistogram", "Simulated ROI", 25, LabelFormat::Scaled(percent))
                    .with_scale(100.0),
                HistogramChart::new(
                    "temperatureChart",
                    "Water Temperature",
                    10,
                    LabelFormat::Range(RangeLabel::new(1)),
                ),
                HistogramChart::new(
                    "cageUtilizationChart",
                    "Cage Volume",
                    7,
                    LabelFormat::Range(RangeLabel::new(1)),
                ),
            ],
            cdf: CdfChart::default(),
            ranked: vec![
                RankedChart {
                    id: "salinityChart".to_string(),
                    title: "Salinity (PSU)".to_string(),
                },
                RankedChart {
                    id: "oxygenChart".to_string(),
                    title: "Dissolved Oxygen (mg/L)".to_string(),
                },
            ],
            heatmap: HeatmapChart::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parameters the aggregators would reject anyway, naming the chart
    pub fn validate(&self) -> Result<()> {
        for chart in &self.histograms {
            if chart.bins == 0 {
                return Err(Error::InvalidArgument(format!(
                    "histogram '{}' needs at least one bin",
                    chart.id
                )));
            }
            if !chart.scale.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "histogram '{}' has a non-finite scale",
                    chart.id
                )));
            }
        }
        if self.cdf.stride == 0 {
            return Err(Error::zero_parameter("cdf stride"));
        }
        for (name, dim) in [("width", self.heatmap.width), ("height", self.heatmap.height)] {
            if !(dim.is_finite() && dim > 0.0) {
                return Err(Error::InvalidArgument(format!(
                    "heatmap canvas {name} must be positive and finite, got {dim}"
                )));
            }
        }
        if self.heatmap.variables.is_empty() {
            return Err(Error::InvalidArgument(
                "heatmap needs at least one variable".to_string(),
            ));
        }
        Ok(())
    }

    pub fn histogram(&self, id: &str) -> Option<&HistogramChart> {
        self.histograms.iter().find(|c| c.id == id)
    }

    pub fn ranked(&self, id: &str) -> Option<&RankedChart> {
        self.ranked.iter().find(|c| c.id == id)
    }
}

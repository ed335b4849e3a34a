//! Per-chart entry points
//!
//! Each chart is produced by an explicit call that receives already parsed
//! data and the renderer (or drawing surface) to hand the result to. The
//! aggregate is also returned so callers can inspect or cache it.

use crate::config::DashboardConfig;
use aqua_cdf::{ranked_series, CdfPoint, CdfSampler, RankedPoint};
use aqua_core::{Error, Result};
use aqua_heatmap::{draw_layout, CorrelationMatrix, HeatmapLayout, Surface};
use aqua_histogram::{EqualWidthBuilder, Histogram, HistogramBuilder};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Categorical series for a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl From<(&str, &Histogram)> for BarSeries {
    fn from((name, histogram): (&str, &Histogram)) -> Self {
        Self {
            name: name.to_string(),
            labels: histogram.labels(),
            values: histogram.counts().into_iter().map(|c| c as f64).collect(),
        }
    }
}

/// Numeric `(x, y)` series for a line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XySeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// The chart library the aggregates are handed to
///
/// Implementations decide how the plain series become pixels; the
/// aggregation code makes no other assumption about them.
pub trait SeriesRenderer {
    fn render_bars(&mut self, chart_id: &str, series: &BarSeries) -> Result<()>;

    fn render_xy(&mut self, chart_id: &str, series: &XySeries) -> Result<()>;
}

/// Renderer that keeps each chart's series as JSON for a browser chart library
///
/// Bar charts become `{"type": "bar", "labels": [...], "datasets": [...]}`,
/// line charts `{"type": "line", "datasets": [{"data": [{"x", "y"}, ...]}]}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRenderer {
    charts: BTreeMap<String, Value>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart(&self, chart_id: &str) -> Option<&Value> {
        self.charts.get(chart_id)
    }

    /// Every rendered chart keyed by chart id
    pub fn charts(&self) -> &BTreeMap<String, Value> {
        &self.charts
    }

    /// All charts as one JSON object keyed by chart id
    pub fn into_value(self) -> Value {
        Value::Object(self.charts.into_iter().collect())
    }
}

impl SeriesRenderer for JsonRenderer {
    fn render_bars(&mut self, chart_id: &str, series: &BarSeries) -> Result<()> {
        let chart = json!({
            "type": "bar",
            "labels": series.labels,
            "datasets": [{ "label": series.name, "data": series.values }],
        });
        self.charts.insert(chart_id.to_string(), chart);
        Ok(())
    }

    fn render_xy(&mut self, chart_id: &str, series: &XySeries) -> Result<()> {
        let data: Vec<Value> = series
            .points
            .iter()
            .map(|(x, y)| json!({ "x": x, "y": y }))
            .collect();
        let chart = json!({
            "type": "line",
            "datasets": [{ "label": series.name, "data": data }],
        });
        self.charts.insert(chart_id.to_string(), chart);
        Ok(())
    }
}

/// The dashboard's charts, driven by a [`DashboardConfig`]
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Bin `data` for the histogram chart `chart_id` and render it as bars
    #[instrument(skip(self, renderer, data), fields(samples = data.len()))]
    pub fn histogram_chart<R: SeriesRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        chart_id: &str,
        data: &[f64],
    ) -> Result<Histogram> {
        let chart = self
            .config
            .histogram(chart_id)
            .ok_or_else(|| unknown_chart(chart_id))?;

        let builder = EqualWidthBuilder::new(chart.bins).with_labeler(chart.labels.clone());
        let histogram = if chart.scale == 1.0 {
            builder.build(data)?
        } else {
            let scaled: Vec<f64> = data.iter().map(|v| v * chart.scale).collect();
            builder.build(&scaled)?
        };

        renderer.render_bars(chart_id, &BarSeries::from((chart.title.as_str(), &histogram)))?;
        debug!(bins = histogram.len(), "rendered histogram chart");
        Ok(histogram)
    }

    /// Sample the empirical CDF of pre-sorted data and render it as a line
    #[instrument(skip(self, renderer, sorted), fields(samples = sorted.len()))]
    pub fn cdf_chart<R: SeriesRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        sorted: &[f64],
    ) -> Result<Vec<CdfPoint>> {
        let chart = &self.config.cdf;
        let points = CdfSampler::new(chart.stride)
            .validate_sorted(chart.validate_sorted)
            .sample(sorted)?;

        let series = XySeries {
            name: chart.title.clone(),
            points: points.iter().map(|&p| p.into()).collect(),
        };
        renderer.render_xy(&chart.id, &series)?;
        debug!(points = points.len(), "rendered CDF chart");
        Ok(points)
    }

    /// Render readings in ascending order against their 1-based rank
    #[instrument(skip(self, renderer, data), fields(samples = data.len()))]
    pub fn ranked_chart<R: SeriesRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        chart_id: &str,
        data: &[f64],
    ) -> Result<Vec<RankedPoint>> {
        let chart = self
            .config
            .ranked(chart_id)
            .ok_or_else(|| unknown_chart(chart_id))?;

        let ranked = ranked_series(data)?;
        let series = XySeries {
            name: chart.title.clone(),
            points: ranked.iter().map(|p| (p.rank as f64, p.value)).collect(),
        };
        renderer.render_xy(chart_id, &series)?;
        Ok(ranked)
    }

    /// Draw the correlation heatmap for a flattened row-major matrix
    ///
    /// The matrix is read against the configured variable list and laid out
    /// on the configured canvas size, anchored at the surface origin.
    #[instrument(skip_all, fields(values = matrix.len()))]
    pub fn correlation_chart<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        matrix: Vec<f64>,
    ) -> Result<HeatmapLayout> {
        let chart = &self.config.heatmap;
        let matrix = CorrelationMatrix::new(matrix, chart.variables.clone())?;
        let layout = HeatmapLayout::compute(&matrix, chart.width, chart.height, &chart.style)?;
        draw_layout(surface, &layout, &chart.style)?;
        debug!(
            width = chart.width,
            height = chart.height,
            surface_width = surface.width(),
            surface_height = surface.height(),
            "rendered correlation chart"
        );
        Ok(layout)
    }
}

fn unknown_chart(chart_id: &str) -> Error {
    Error::InvalidArgument(format!("no chart configured with id '{chart_id}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqua_heatmap::RecordingSurface;

    #[test]
    fn test_histogram_chart_renders_bars() {
        let dashboard = Dashboard::default();
        let mut renderer = JsonRenderer::new();
        let margins = [0.05, 0.12, 0.18, 0.22, 0.31, 0.4];

        let hist = dashboard
            .histogram_chart(&mut renderer, "profitDistributionChart", &margins)
            .unwrap();
        assert_eq!(hist.len(), 12);

        let chart = renderer.chart("profitDistributionChart").unwrap();
        assert_eq!(chart["type"], "bar");
        assert_eq!(chart["labels"].as_array().unwrap().len(), 12);
        assert_eq!(chart["labels"][0], "0.05-0.08");
        assert_eq!(chart["datasets"][0]["label"], "Number of Sites");
        let total: f64 = chart["datasets"][0]["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_f64)
            .sum();
        assert_eq!(total, 6.0);
    }

    #[test]
    fn test_scaled_histogram() {
        let dashboard = Dashboard::default();
        let mut renderer = JsonRenderer::new();
        let hist = dashboard
            .histogram_chart(&mut renderer, "roiHistogram", &[0.1, 0.35])
            .unwrap();
        assert_eq!(hist.min(), 10.0);
        assert_eq!(hist.bins()[0].label, "10%");
    }

    #[test]
    fn test_unknown_chart() {
        let dashboard = Dashboard::default();
        let err = dashboard
            .histogram_chart(&mut JsonRenderer::new(), "missing", &[1.0])
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_cdf_chart() {
        let dashboard = Dashboard::default();
        let mut renderer = JsonRenderer::new();
        let sorted: Vec<f64> = (0..1000).map(f64::from).collect();

        let points = dashboard.cdf_chart(&mut renderer, &sorted).unwrap();
        assert_eq!(points.len(), 20);

        let chart = renderer.chart("cdfChart").unwrap();
        assert_eq!(chart["type"], "line");
        assert_eq!(chart["datasets"][0]["data"][1]["x"], 50.0);
        assert_eq!(chart["datasets"][0]["data"][1]["y"], 5.0);
    }

    #[test]
    fn test_ranked_chart() {
        let dashboard = Dashboard::default();
        let mut renderer = JsonRenderer::new();
        dashboard
            .ranked_chart(&mut renderer, "salinityChart", &[33.1, 31.0, 32.4])
            .unwrap();
        let chart = renderer.chart("salinityChart").unwrap();
        assert_eq!(chart["datasets"][0]["data"][0]["x"], 1.0);
        assert_eq!(chart["datasets"][0]["data"][0]["y"], 31.0);
    }

    #[test]
    fn test_correlation_chart() {
        let dashboard = Dashboard::default();
        let mut canvas = RecordingSurface::new(500.0, 500.0);
        let values: Vec<f64> = (0..25).map(|i| if i % 6 == 0 { 1.0 } else { 0.25 }).collect();

        let layout = dashboard.correlation_chart(&mut canvas, values).unwrap();
        assert_eq!(layout.cells.len(), 25);
        assert_eq!(layout.cell_width, 100.0);

        let err = dashboard
            .correlation_chart(&mut canvas, vec![1.0; 24])
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_json_renderer_collects_charts() {
        let mut renderer = JsonRenderer::new();
        renderer
            .render_bars(
                "a",
                &BarSeries {
                    name: "n".into(),
                    labels: vec!["x".into()],
                    values: vec![1.0],
                },
            )
            .unwrap();
        assert_eq!(renderer.charts().len(), 1);
        let all = renderer.into_value();
        assert_eq!(all["a"]["labels"][0], "x");
    }
}

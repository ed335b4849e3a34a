//! Chart-ready aggregates for aquaculture analytics dashboards
//!
//! This crate ties together the aggregation crates of the workspace and
//! drives them from a single [`DashboardConfig`]:
//!
//! - [`aqua_histogram`]: equal-width binning with labelled bins
//! - [`aqua_cdf`]: stride-sampled empirical CDFs and ranked series
//! - [`aqua_heatmap`]: correlation matrix layout and drawing
//!
//! Page templates hand numbers over as JSON arrays, decoded with
//! [`parse_samples`]. Each chart then has one explicit entry point on
//! [`Dashboard`] which passes the aggregate to a [`SeriesRenderer`] or, for
//! the heatmap, to a drawing [`Surface`].
//!
//! # Examples
//!
//! ```rust
//! use aqua_charts::{parse_samples, Dashboard, JsonRenderer};
//!
//! let dashboard = Dashboard::default();
//! let margins = parse_samples("[0.12, 0.18, 0.25, 0.31, 0.4]").unwrap();
//!
//! let mut renderer = JsonRenderer::new();
//! let hist = dashboard
//!     .histogram_chart(&mut renderer, "profitDistributionChart", &margins)
//!     .unwrap();
//!
//! assert_eq!(hist.len(), 12);
//! assert_eq!(hist.total_count(), 5);
//! ```
//!
//! # Features
//!
//! - `bitmap`: draw heatmaps onto any plotters backend
//! - `echarts`: render series as ECharts charts

pub mod config;
pub mod dashboard;
pub mod input;

#[cfg(feature = "echarts")]
pub mod echarts;

pub use config::{CdfChart, DashboardConfig, HeatmapChart, HistogramChart, RankedChart};
pub use dashboard::{BarSeries, Dashboard, JsonRenderer, SeriesRenderer, XySeries};
pub use input::{parse_labels, parse_samples};

#[cfg(feature = "echarts")]
pub use echarts::EChartsRenderer;

// Re-export core
pub use aqua_core::{Error, Result};

// Re-export aggregation crates
pub use aqua_cdf::{cdf, cdf_from_unsorted, ranked_series, CdfPoint, CdfSampler, RankedPoint};
pub use aqua_heatmap::{
    draw_heatmap, draw_layout, layout_cells, CorrelationCell, CorrelationMatrix,
    CorrelationStrength, DivergingScale, DrawCommand, HeatmapLayout, HeatmapStyle, Rect,
    RecordingSurface, Rgba, Surface, TextStyle,
};
pub use aqua_histogram::{
    histogram, histogram_with_labels, BinLabeler, EqualWidthBuilder, Histogram, HistogramBin,
    HistogramBuilder, LabelFormat, RangeLabel, ScaledLabel, StartLabel,
};

#[cfg(feature = "bitmap")]
pub use aqua_heatmap::PlottersSurface;

pub use aqua_cdf;
pub use aqua_core;
pub use aqua_heatmap;
pub use aqua_histogram;

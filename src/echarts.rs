//! ECharts output for the dashboard series

use crate::dashboard::{BarSeries, SeriesRenderer, XySeries};
use aqua_core::{Error, Result};
use charming::{
    component::{Axis, Title},
    element::AxisType,
    series::{Bar, Line},
    Chart, HtmlRenderer,
};
use std::collections::BTreeMap;

/// Renderer that builds one ECharts chart per chart id
#[derive(Default)]
pub struct EChartsRenderer {
    charts: BTreeMap<String, Chart>,
}

impl EChartsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart(&self, chart_id: &str) -> Option<&Chart> {
        self.charts.get(chart_id)
    }

    pub fn chart_ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    /// Standalone HTML page for one chart
    pub fn to_html(&self, chart_id: &str, width: u64, height: u64) -> Result<String> {
        let chart = self.charts.get(chart_id).ok_or_else(|| {
            Error::InvalidArgument(format!("no chart rendered with id '{chart_id}'"))
        })?;
        HtmlRenderer::new(chart_id, width, height)
            .render(chart)
            .map_err(|e| Error::Render(format!("{e:?}")))
    }
}

impl SeriesRenderer for EChartsRenderer {
    fn render_bars(&mut self, chart_id: &str, series: &BarSeries) -> Result<()> {
        let chart = Chart::new()
            .title(Title::new().text(series.name.as_str()))
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(series.labels.clone()),
            )
            .y_axis(Axis::new().type_(AxisType::Value))
            .series(Bar::new().name(series.name.as_str()).data(series.values.clone()));
        self.charts.insert(chart_id.to_string(), chart);
        Ok(())
    }

    fn render_xy(&mut self, chart_id: &str, series: &XySeries) -> Result<()> {
        let data: Vec<Vec<f64>> = series.points.iter().map(|&(x, y)| vec![x, y]).collect();
        let chart = Chart::new()
            .title(Title::new().text(series.name.as_str()))
            .x_axis(Axis::new().type_(AxisType::Value))
            .y_axis(Axis::new().type_(AxisType::Value))
            .series(Line::new().name(series.name.as_str()).data(data));
        self.charts.insert(chart_id.to_string(), chart);
        Ok(())
    }
}

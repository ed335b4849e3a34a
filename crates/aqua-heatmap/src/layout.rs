//! Pure heatmap geometry
//!
//! Everything the renderer draws is computed here first, from the matrix and
//! the canvas size alone. Drawing is then a straight walk over the result.

use crate::color::{DivergingScale, Rgba};
use crate::matrix::{CorrelationCell, CorrelationMatrix};
use crate::surface::{Rect, TextAlign, TextStyle};
use aqua_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Presentation parameters of the heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapStyle {
    pub scale: DivergingScale,
    pub border: Rgba,
    pub border_width: f64,
    /// Decimals of the value printed in each cell
    pub value_precision: usize,
    pub value_text: TextStyle,
    pub label_text: TextStyle,
    /// Distance of the axis labels from the canvas edge
    pub label_offset: f64,
    /// Rotation of the column labels in radians
    pub column_label_angle: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            scale: DivergingScale::default(),
            border: Rgba::new(255, 255, 255, 0.3),
            border_width: 1.0,
            value_precision: 2,
            value_text: TextStyle::default(),
            label_text: TextStyle::default().with_size(13.0).with_bold(true),
            label_offset: 10.0,
            column_label_angle: -FRAC_PI_4,
        }
    }
}

impl HeatmapStyle {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.value_precision = precision;
        self
    }

    pub fn with_scale(mut self, scale: DivergingScale) -> Self {
        self.scale = scale;
        self
    }
}

/// A matrix cell placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCell {
    pub cell: CorrelationCell,
    pub rect: Rect,
    pub fill: Rgba,
    /// Value formatted at the style's precision
    pub text: String,
}

/// A variable name placed along one axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    /// Anchor point the label is drawn at
    pub x: f64,
    pub y: f64,
    /// Rotation about the anchor in radians
    pub rotation: f64,
    pub align: TextAlign,
}

/// Complete geometry of one heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapLayout {
    pub width: f64,
    pub height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Row-major, one per matrix entry
    pub cells: Vec<LayoutCell>,
    pub column_labels: Vec<AxisLabel>,
    pub row_labels: Vec<AxisLabel>,
}

impl HeatmapLayout {
    /// Divide a `width × height` canvas into a `v × v` grid for `matrix`
    pub fn compute(
        matrix: &CorrelationMatrix,
        width: f64,
        height: f64,
        style: &HeatmapStyle,
    ) -> Result<Self> {
        for (name, dim) in [("width", width), ("height", height)] {
            if !(dim.is_finite() && dim > 0.0) {
                return Err(Error::InvalidArgument(format!(
                    "canvas {name} must be positive and finite, got {dim}"
                )));
            }
        }

        let v = matrix.dimension() as f64;
        let cell_width = width / v;
        let cell_height = height / v;
        let p = style.value_precision;

        let cells = matrix
            .cells()
            .into_iter()
            .map(|cell| {
                let rect = Rect::new(
                    cell.col as f64 * cell_width,
                    cell.row as f64 * cell_height,
                    cell_width,
                    cell_height,
                );
                LayoutCell {
                    fill: style.scale.color(cell.value),
                    text: format!("{:.p$}", cell.value),
                    rect,
                    cell,
                }
            })
            .collect();

        let column_labels = matrix
            .variables()
            .iter()
            .enumerate()
            .map(|(i, name)| AxisLabel {
                text: name.clone(),
                x: i as f64 * cell_width + cell_width / 2.0,
                y: height - style.label_offset,
                rotation: style.column_label_angle,
                align: TextAlign::Right,
            })
            .collect();

        let row_labels = matrix
            .variables()
            .iter()
            .enumerate()
            .map(|(i, name)| AxisLabel {
                text: name.clone(),
                x: -style.label_offset,
                y: i as f64 * cell_height + cell_height / 2.0,
                rotation: 0.0,
                align: TextAlign::Right,
            })
            .collect();

        Ok(Self {
            width,
            height,
            cell_width,
            cell_height,
            cells,
            column_labels,
            row_labels,
        })
    }

    /// Number of variables along each axis
    pub fn dimension(&self) -> usize {
        self.row_labels.len()
    }

    /// Cell under a canvas point, if any
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&LayoutCell> {
        if !(0.0..self.width).contains(&x) || !(0.0..self.height).contains(&y) {
            return None;
        }
        let v = self.dimension();
        if v == 0 {
            return None;
        }
        let col = ((x / self.cell_width) as usize).min(v - 1);
        let row = ((y / self.cell_height) as usize).min(v - 1);
        self.cells.get(row * v + col)
    }
}

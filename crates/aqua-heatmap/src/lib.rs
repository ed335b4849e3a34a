//! Correlation heatmaps for dashboard charts
//!
//! A flattened row-major correlation matrix plus its variable names is
//! decomposed into cells ([`CorrelationMatrix::cells`]), placed on a fixed
//! canvas grid ([`HeatmapLayout::compute`]) and finally drawn onto any
//! [`Surface`] ([`draw_heatmap`]). Geometry is pure; only the last step
//! touches the surface.
//!
//! # Examples
//!
//! ```rust
//! use aqua_heatmap::{draw_heatmap, CorrelationMatrix, HeatmapStyle, RecordingSurface};
//!
//! let matrix = CorrelationMatrix::new(
//!     vec![1.0, 0.45, 0.45, 1.0],
//!     vec!["Growth", "Survival"],
//! ).unwrap();
//!
//! let mut canvas = RecordingSurface::new(400.0, 400.0);
//! let layout = draw_heatmap(&mut canvas, &matrix, &HeatmapStyle::default()).unwrap();
//!
//! assert_eq!(layout.cells.len(), 4);
//! assert_eq!(layout.cells[1].text, "0.45");
//! ```

pub mod color;
pub mod layout;
pub mod matrix;
pub mod render;
pub mod surface;

#[cfg(feature = "bitmap")]
pub mod bitmap;

pub use color::{DivergingScale, Rgba};
pub use layout::{AxisLabel, HeatmapLayout, HeatmapStyle, LayoutCell};
pub use matrix::{CorrelationCell, CorrelationMatrix, CorrelationStrength};
pub use render::{draw_heatmap, draw_layout};
pub use surface::{DrawCommand, Rect, RecordingSurface, Surface, TextAlign, TextBaseline, TextStyle};

#[cfg(feature = "bitmap")]
pub use bitmap::PlottersSurface;

pub use aqua_core::Result;

/// Decompose a flattened matrix into row-major `(row, column, value)` cells
pub fn layout_cells<S: Into<String>>(
    matrix: Vec<f64>,
    variables: Vec<S>,
) -> Result<Vec<CorrelationCell>> {
    Ok(CorrelationMatrix::new(matrix, variables)?.cells())
}

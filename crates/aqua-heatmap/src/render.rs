//! Drawing a computed heatmap onto a [`Surface`]

use crate::layout::{AxisLabel, HeatmapLayout, HeatmapStyle};
use crate::matrix::CorrelationMatrix;
use crate::surface::{Rect, Surface};
use aqua_core::Result;
use tracing::{debug, instrument};

/// Repaint `surface` with an already computed layout
///
/// The whole canvas is cleared first, so nothing from a previous call
/// survives. Cells are filled, outlined and annotated in row-major order;
/// each column label is drawn inside its own save/restore pair.
pub fn draw_layout<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &HeatmapLayout,
    style: &HeatmapStyle,
) -> Result<()> {
    surface.clear_rect(Rect::new(0.0, 0.0, layout.width, layout.height))?;

    for cell in &layout.cells {
        surface.fill_rect(cell.rect, cell.fill)?;
        surface.stroke_rect(cell.rect, style.border, style.border_width)?;
        let (cx, cy) = cell.rect.center();
        surface.fill_text(&cell.text, cx, cy, &style.value_text)?;
    }

    for (column, row) in layout.column_labels.iter().zip(&layout.row_labels) {
        draw_rotated_label(surface, column, style)?;
        let text_style = style.label_text.clone().with_align(row.align);
        surface.fill_text(&row.text, row.x, row.y, &text_style)?;
    }

    Ok(())
}

fn draw_rotated_label<S: Surface + ?Sized>(
    surface: &mut S,
    label: &AxisLabel,
    style: &HeatmapStyle,
) -> Result<()> {
    let text_style = style.label_text.clone().with_align(label.align);
    surface.save()?;
    surface.translate(label.x, label.y)?;
    surface.rotate(label.rotation)?;
    surface.fill_text(&label.text, 0.0, 0.0, &text_style)?;
    surface.restore()
}

/// Lay out `matrix` over the full surface and draw it
///
/// Returns the layout that was drawn, e.g. for hit-testing tooltips.
#[instrument(skip_all, fields(variables = matrix.dimension()))]
pub fn draw_heatmap<S: Surface + ?Sized>(
    surface: &mut S,
    matrix: &CorrelationMatrix,
    style: &HeatmapStyle,
) -> Result<HeatmapLayout> {
    let layout = HeatmapLayout::compute(matrix, surface.width(), surface.height(), style)?;
    draw_layout(surface, &layout, style)?;
    debug!(
        cells = layout.cells.len(),
        cell_width = layout.cell_width,
        cell_height = layout.cell_height,
        "drew correlation heatmap"
    );
    Ok(layout)
}

//! Drawing tests against the recording surface

use aqua_heatmap::{
    draw_heatmap, layout_cells, CorrelationMatrix, DrawCommand, HeatmapLayout, HeatmapStyle, Rect,
    RecordingSurface, Rgba, TextAlign,
};
use proptest::prelude::*;
use std::f64::consts::FRAC_PI_4;

const DASHBOARD_MATRIX: [f64; 25] = [
    1.0, 0.45, -0.32, 0.58, 0.23, //
    0.45, 1.0, -0.41, 0.62, 0.18, //
    -0.32, -0.41, 1.0, -0.51, -0.27, //
    0.58, 0.62, -0.51, 1.0, 0.35, //
    0.23, 0.18, -0.27, 0.35, 1.0,
];

fn dashboard_matrix() -> CorrelationMatrix {
    CorrelationMatrix::new(
        DASHBOARD_MATRIX.to_vec(),
        vec!["Growth", "Survival", "FCR", "Profit", "Density"],
    )
    .unwrap()
}

#[test]
fn test_decomposition_round_trip() {
    let cells = layout_cells(vec![1.0, 0.5, 0.5, 1.0], vec!["A", "B"]).unwrap();
    let triples: Vec<(&str, &str, f64)> = cells
        .iter()
        .map(|c| (c.row_variable.as_str(), c.col_variable.as_str(), c.value))
        .collect();
    assert_eq!(
        triples,
        vec![("A", "A", 1.0), ("A", "B", 0.5), ("B", "A", 0.5), ("B", "B", 1.0)]
    );
}

#[test]
fn test_mismatched_matrix_is_invalid_argument() {
    let err = layout_cells(vec![1.0, 0.5, 0.5], vec!["A", "B"]).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_draw_sequence() {
    let mut canvas = RecordingSurface::new(500.0, 500.0);
    let style = HeatmapStyle::default();
    let layout = draw_heatmap(&mut canvas, &dashboard_matrix(), &style).unwrap();
    let commands = canvas.commands();

    // clear + 3 per cell + (save, translate, rotate, text, restore, text) per variable
    assert_eq!(commands.len(), 1 + 25 * 3 + 5 * 6);
    assert_eq!(
        commands[0],
        DrawCommand::ClearRect {
            rect: Rect::new(0.0, 0.0, 500.0, 500.0)
        }
    );

    // Second cell: Growth vs Survival
    assert_eq!(
        commands[4],
        DrawCommand::FillRect {
            rect: Rect::new(100.0, 0.0, 100.0, 100.0),
            color: Rgba::new(6, 214, 160, 0.45),
        }
    );
    assert_eq!(
        commands[5],
        DrawCommand::StrokeRect {
            rect: Rect::new(100.0, 0.0, 100.0, 100.0),
            color: Rgba::new(255, 255, 255, 0.3),
            line_width: 1.0,
        }
    );
    match &commands[6] {
        DrawCommand::FillText { text, x, y, .. } => {
            assert_eq!((text.as_str(), *x, *y), ("0.45", 150.0, 50.0));
        }
        other => panic!("expected value text, got {other:?}"),
    }

    // First column label is drawn under its own transform
    let labels = &commands[76..82];
    assert_eq!(labels[0], DrawCommand::Save);
    assert_eq!(labels[1], DrawCommand::Translate { dx: 50.0, dy: 490.0 });
    assert_eq!(labels[2], DrawCommand::Rotate { radians: -FRAC_PI_4 });
    assert_eq!(labels[4], DrawCommand::Restore);
    match &labels[5] {
        DrawCommand::FillText { text, x, y, style } => {
            assert_eq!((text.as_str(), *x, *y), ("Growth", -10.0, 50.0));
            assert!(style.bold);
            assert_eq!(style.align, TextAlign::Right);
        }
        other => panic!("expected row label, got {other:?}"),
    }

    assert_eq!(layout.cells.len(), 25);
}

#[test]
fn test_redraw_fully_repaints() {
    let matrix = dashboard_matrix();
    let style = HeatmapStyle::default();
    let mut first = RecordingSurface::new(300.0, 300.0);
    draw_heatmap(&mut first, &matrix, &style).unwrap();

    let mut second = first.clone();
    second.reset();
    draw_heatmap(&mut second, &matrix, &style).unwrap();
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn test_zero_correlation_is_transparent() {
    let matrix = CorrelationMatrix::new(vec![1.0, 0.0, 0.0, 1.0], vec!["A", "B"]).unwrap();
    let layout = HeatmapLayout::compute(&matrix, 100.0, 100.0, &HeatmapStyle::default()).unwrap();
    assert!(layout.cells[1].fill.is_transparent());
    assert_eq!(layout.cells[1].text, "0.00");
}

proptest! {
    // Property: every flat index maps to exactly one grid cell
    #[test]
    fn prop_every_index_has_one_cell(v in 1usize..12, w in 10.0f64..1000.0, h in 10.0f64..1000.0) {
        let values: Vec<f64> = (0..v * v).map(|i| ((i % 21) as f64 - 10.0) / 10.0).collect();
        let names: Vec<String> = (0..v).map(|i| format!("v{i}")).collect();
        let matrix = CorrelationMatrix::new(values.clone(), names).unwrap();
        let layout = HeatmapLayout::compute(&matrix, w, h, &HeatmapStyle::default()).unwrap();

        prop_assert_eq!(layout.cells.len(), v * v);
        for (i, cell) in layout.cells.iter().enumerate() {
            prop_assert_eq!((cell.cell.row, cell.cell.col), (i / v, i % v));
            prop_assert_eq!(cell.cell.value, values[i]);
            let (cx, cy) = cell.rect.center();
            let hit = layout.cell_at(cx, cy).unwrap();
            prop_assert_eq!((hit.cell.row, hit.cell.col), (i / v, i % v));
            prop_assert!((0.0..=1.0).contains(&cell.fill.a));
        }
    }
}

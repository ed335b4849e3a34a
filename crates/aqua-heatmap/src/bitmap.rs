//! [`Surface`] implementation on a plotters drawing area
//!
//! plotters has no notion of a current transform, so this surface keeps its
//! own affine transform and save/restore stack and maps every coordinate
//! before handing it to the backend. Rectangles under rotation become
//! polygons. Text can only be turned by quarter turns in plotters, so the
//! current rotation is snapped to the nearest one.

use crate::color::Rgba;
use crate::surface::{Rect, Surface, TextAlign, TextBaseline, TextStyle};
use aqua_core::{Error, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{PathElement, Polygon, Rectangle, Text};
use plotters::prelude::DrawingBackend;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{
    Color, FontDesc, FontFamily, FontStyle, FontTransform, RGBAColor, ShapeStyle,
    TextStyle as PlottersTextStyle, WHITE,
};
use std::f64::consts::FRAC_PI_2;

/// 2-D affine transform in canvas order `(a, b, c, d, e, f)`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Affine {
    const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.e += self.a * dx + self.c * dy;
        self.f += self.b * dx + self.d * dy;
    }

    fn rotate(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    fn is_axis_aligned(&self) -> bool {
        self.b == 0.0 && self.c == 0.0
    }

    fn angle(&self) -> f64 {
        self.b.atan2(self.a)
    }
}

fn to_pixel((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn to_plotters(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Nearest plotters text orientation for a rotation angle
fn quarter_turn(radians: f64) -> FontTransform {
    match ((radians / FRAC_PI_2).round() as i64).rem_euclid(4) {
        1 => FontTransform::Rotate90,
        2 => FontTransform::Rotate180,
        3 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

/// A [`Surface`] drawing into a plotters [`DrawingArea`]
pub struct PlottersSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    width: f64,
    height: f64,
    background: RGBAColor,
    transform: Affine,
    stack: Vec<Affine>,
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    /// Wrap a drawing area; cleared regions are painted white
    pub fn new(area: DrawingArea<DB, Shift>) -> Self {
        let (w, h) = area.dim_in_pixel();
        Self {
            area,
            width: f64::from(w),
            height: f64::from(h),
            background: WHITE.to_rgba(),
            transform: Affine::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// Colour painted by [`Surface::clear_rect`]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = to_plotters(color);
        self
    }

    /// Flush pending drawing to the backend
    pub fn present(&self) -> Result<()> {
        self.area.present().map_err(render_err)
    }

    pub fn into_inner(self) -> DrawingArea<DB, Shift> {
        self.area
    }

    fn corners(&self, rect: Rect) -> Vec<(i32, i32)> {
        let (x1, y1) = rect.far_corner();
        [(rect.x, rect.y), (x1, rect.y), (x1, y1), (rect.x, y1)]
            .into_iter()
            .map(|(x, y)| to_pixel(self.transform.apply(x, y)))
            .collect()
    }

    fn paint_rect(&self, rect: Rect, style: ShapeStyle) -> Result<()> {
        if self.transform.is_axis_aligned() {
            let (x1, y1) = rect.far_corner();
            let p0 = to_pixel(self.transform.apply(rect.x, rect.y));
            let p1 = to_pixel(self.transform.apply(x1, y1));
            self.area
                .draw(&Rectangle::new([p0, p1], style))
                .map_err(render_err)
        } else if style.filled {
            self.area
                .draw(&Polygon::new(self.corners(rect), style))
                .map_err(render_err)
        } else {
            let mut outline = self.corners(rect);
            outline.push(outline[0]);
            self.area
                .draw(&PathElement::new(outline, style))
                .map_err(render_err)
        }
    }
}

impl<DB: DrawingBackend> Surface for PlottersSurface<DB> {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) -> Result<()> {
        self.paint_rect(rect, self.background.filled())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        if color.is_transparent() {
            return Ok(());
        }
        self.paint_rect(rect, to_plotters(color).filled())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, line_width: f64) -> Result<()> {
        let width = line_width.round().max(1.0) as u32;
        self.paint_rect(rect, to_plotters(color).stroke_width(width))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        let font_style = if style.bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        let color = to_plotters(style.color);
        let h = match style.align {
            TextAlign::Left => HPos::Left,
            TextAlign::Center => HPos::Center,
            TextAlign::Right => HPos::Right,
        };
        let v = match style.baseline {
            TextBaseline::Top => VPos::Top,
            TextBaseline::Middle => VPos::Center,
            TextBaseline::Alphabetic | TextBaseline::Bottom => VPos::Bottom,
        };

        let font = FontDesc::new(FontFamily::Name(&style.family), style.size, font_style);
        let text_style = PlottersTextStyle::from(font)
            .color(&color)
            .pos(Pos::new(h, v))
            .transform(quarter_turn(self.transform.angle()));

        let anchor = to_pixel(self.transform.apply(x, y));
        self.area
            .draw(&Text::new(text, anchor, text_style))
            .map_err(render_err)
    }

    fn save(&mut self) -> Result<()> {
        self.stack.push(self.transform);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.transform = self
            .stack
            .pop()
            .ok_or_else(|| Error::Render("restore without matching save".to_string()))?;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.transform.translate(dx, dy);
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<()> {
        self.transform.rotate(radians);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plotters::prelude::{BitMapBackend, IntoDrawingArea};
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_affine_translate_then_rotate() {
        let mut t = Affine::IDENTITY;
        t.translate(10.0, 20.0);
        t.rotate(FRAC_PI_2);
        let (x, y) = t.apply(1.0, 0.0);
        assert_relative_eq!(x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(y, 21.0, epsilon = 1e-12);
        assert_relative_eq!(t.angle(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turn_snapping() {
        assert!(matches!(quarter_turn(0.1), FontTransform::None));
        assert!(matches!(quarter_turn(-FRAC_PI_2 + 0.2), FontTransform::Rotate270));
        assert!(matches!(quarter_turn(-FRAC_PI_4 + 0.2), FontTransform::None));
        assert!(matches!(quarter_turn(FRAC_PI_2), FontTransform::Rotate90));
    }

    #[test]
    fn test_fill_rect_paints_pixels() {
        let mut buf = vec![0u8; 20 * 20 * 3];
        {
            let area = BitMapBackend::with_buffer(&mut buf, (20, 20)).into_drawing_area();
            let mut surface = PlottersSurface::new(area);
            assert_eq!((surface.width(), surface.height()), (20.0, 20.0));

            surface.clear_rect(Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
            surface.save().unwrap();
            surface.translate(10.0, 10.0).unwrap();
            surface
                .fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Rgba::rgb(214, 40, 40))
                .unwrap();
            surface.restore().unwrap();
            assert!(surface.restore().is_err());
            surface.present().unwrap();
        }

        let pixel = |x: usize, y: usize| {
            let i = (y * 20 + x) * 3;
            [buf[i], buf[i + 1], buf[i + 2]]
        };
        assert_eq!(pixel(2, 2), [255, 255, 255]);
        assert_eq!(pixel(12, 12), [214, 40, 40]);
    }
}

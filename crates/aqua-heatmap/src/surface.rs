//! Drawing surface abstraction
//!
//! The heatmap renderer only needs a handful of 2-D canvas operations.
//! [`Surface`] names exactly those, so the same drawing code can target a
//! browser canvas (through a recorded display list), a bitmap, or a test
//! double.

use crate::color::Rgba;
use aqua_core::Result;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Opposite corner `(x + width, y + height)`
    pub fn far_corner(&self) -> (f64, f64) {
        (self.x + self.width, self.y + self.height)
    }
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Alphabetic,
    Bottom,
}

/// Font and anchoring for a text draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: String,
    pub size: f64,
    pub bold: bool,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 14.0,
            bold: false,
            color: Rgba::rgb(51, 51, 51),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        }
    }
}

impl TextStyle {
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

/// Minimal 2-D vector-graphics surface
///
/// Coordinates are pixels with the origin top-left, subject to the current
/// transform set by [`translate`](Surface::translate) and
/// [`rotate`](Surface::rotate). [`save`](Surface::save) and
/// [`restore`](Surface::restore) push and pop that transform.
pub trait Surface {
    /// Width of the drawable area in pixels
    fn width(&self) -> f64;

    /// Height of the drawable area in pixels
    fn height(&self) -> f64;

    fn clear_rect(&mut self, rect: Rect) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()>;

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, line_width: f64) -> Result<()>;

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()>;

    fn save(&mut self) -> Result<()>;

    fn restore(&mut self) -> Result<()>;

    fn translate(&mut self, dx: f64, dy: f64) -> Result<()>;

    /// Rotate subsequent drawing by `radians` (clockwise on screen)
    fn rotate(&mut self, radians: f64) -> Result<()>;
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    ClearRect {
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba,
        line_width: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        radians: f64,
    },
}

/// Surface that records every call as a [`DrawCommand`]
///
/// The recorded display list serializes to JSON, which a browser can replay
/// onto a `<canvas>` 2-D context call for call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
    #[serde(skip)]
    depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
        self.depth = 0;
    }

    /// Issue the recorded calls, in order, against another surface
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) -> Result<()> {
        for command in &self.commands {
            match command {
                DrawCommand::ClearRect { rect } => target.clear_rect(*rect)?,
                DrawCommand::FillRect { rect, color } => target.fill_rect(*rect, *color)?,
                DrawCommand::StrokeRect {
                    rect,
                    color,
                    line_width,
                } => target.stroke_rect(*rect, *color, *line_width)?,
                DrawCommand::FillText { text, x, y, style } => {
                    target.fill_text(text, *x, *y, style)?
                }
                DrawCommand::Save => target.save()?,
                DrawCommand::Restore => target.restore()?,
                DrawCommand::Translate { dx, dy } => target.translate(*dx, *dy)?,
                DrawCommand::Rotate { radians } => target.rotate(*radians)?,
            }
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) -> Result<()> {
        self.commands.push(DrawCommand::ClearRect { rect });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, line_width: f64) -> Result<()> {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(aqua_core::Error::Render(
                "restore without matching save".to_string(),
            ));
        }
        self.depth -= 1;
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.commands.push(DrawCommand::Translate { dx, dy });
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<()> {
        self.commands.push(DrawCommand::Rotate { radians });
        Ok(())
    }
}

//! Paint surface capability
//!
//! Elements never talk to a rendering backend directly; they issue primitive
//! draw calls on a [`PaintSurface`]. All coordinates passed to a surface are
//! device coordinates.

mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use rkcanvas_core::{CanvasError, Color, Rect, Result, Vec2};

/// Drawing primitives consumed by canvas elements.
pub trait PaintSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fills the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Strokes an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, width: f64);

    /// Draws `text` with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Vec2, font_size: f64, color: Color);

    /// Measures `text` at `font_size`.
    fn text_extent(&self, text: &str, font_size: f64) -> Vec2;
}

/// Stroke parameters of a rectangle border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f64,
}

impl Border {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Draws a rectangle with an optional fill and an optional border.
///
/// The fill is issued before the border so the border stays visible.
///
/// # Errors
///
/// Returns [`CanvasError::InvalidPaint`] when neither a fill nor a border is
/// given, or when the border has a non-positive width.
pub fn draw_rect(
    surface: &mut dyn PaintSurface,
    rect: Rect,
    fill: Option<Color>,
    border: Option<Border>,
) -> Result<()> {
    if fill.is_none() && border.is_none() {
        return Err(CanvasError::invalid_paint(
            "rectangle needs a fill or a border",
        ));
    }
    if let Some(border) = border {
        if !(border.width > 0.0) {
            return Err(CanvasError::invalid_paint(format!(
                "border width must be positive, got {}",
                border.width
            )));
        }
    }

    if let Some(color) = fill {
        surface.fill_rect(rect, color);
    }
    if let Some(border) = border {
        surface.stroke_rect(rect, border.color, border.width);
    }
    Ok(())
}

use super::PaintSurface;
use rkcanvas_core::{Color, Rect, Vec2};

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// One primitive issued on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f64,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        width: f64,
    },
    Text {
        text: String,
        position: Vec2,
        font_size: f64,
        color: Color,
    },
}

/// Headless surface that records every draw call in order.
///
/// Text is measured with a fixed per-glyph advance so layout is
/// deterministic without a font backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the recorded commands and leaves the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaintSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillEllipse { rect, color });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, width: f64) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font_size,
            color,
        });
    }

    fn text_extent(&self, text: &str, font_size: f64) -> Vec2 {
        let glyphs = text.chars().count() as f64;
        Vec2::new(glyphs * font_size * GLYPH_WIDTH_FACTOR, font_size)
    }
}

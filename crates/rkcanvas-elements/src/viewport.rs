//! Viewport and coordinate transformation for canvas rendering.
//!
//! Elements work in logical (model) coordinates and convert to device
//! (scrolled) coordinates only when painting. Geometry arrives already scaled
//! for the current zoom, so the transform is a pure translation; the scale
//! factor only widens strokes, text and centroid dots.

use rkcanvas_core::Vec2;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Logical-to-device coordinate transform supplied by the viewport.
pub trait ViewTransform {
    /// Converts a logical point to device space.
    fn to_device(&self, logical: Vec2) -> Vec2;

    /// Zoom factor applied to stroke widths and font sizes.
    fn scale(&self) -> f64 {
        1.0
    }
}

/// Any `Fn(Vec2) -> Vec2` is a transform with unit scale.
impl<F> ViewTransform for F
where
    F: Fn(Vec2) -> Vec2,
{
    fn to_device(&self, logical: Vec2) -> Vec2 {
        self(logical)
    }
}

/// Shared handle to a transform, held by every element.
pub type TransformRef = Rc<dyn ViewTransform>;

/// Scroll offset and zoom of one canvas view.
///
/// Interior mutability lets the view scroll while elements keep holding the
/// same `Rc<Viewport>`.
#[derive(Debug)]
pub struct Viewport {
    scroll: Cell<Vec2>,
    scale: Cell<f64>,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scroll: Cell::new(Vec2::zero()),
            scale: Cell::new(1.0),
        }
    }

    /// Gets the current scroll offset (logical position of the device origin).
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll.get()
    }

    pub fn set_scroll_offset(&self, offset: Vec2) {
        self.scroll.set(offset);
    }

    /// Scrolls by a delta amount.
    pub fn scroll_by(&self, delta: Vec2) {
        self.scroll.set(self.scroll.get() + delta);
    }

    /// Sets the zoom factor, constrained between 0.1 and 50.0.
    pub fn set_scale(&self, scale: f64) {
        if scale > 0.1 && scale < 50.0 {
            self.scale.set(scale);
        }
    }

    /// Converts a device point back to logical coordinates.
    pub fn to_logical(&self, device: Vec2) -> Vec2 {
        device + self.scroll.get()
    }
}

impl ViewTransform for Viewport {
    fn to_device(&self, logical: Vec2) -> Vec2 {
        logical - self.scroll.get()
    }

    fn scale(&self) -> f64 {
        self.scale.get()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Scroll: {}",
            self.scale.get(),
            self.scroll.get()
        )
    }
}

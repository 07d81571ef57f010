//! Element contract
//!
//! Node elements, reaction elements and the select box all implement
//! [`CanvasElement`]. The shared part is kept to [`ElementBase`]: a layer and
//! the injected transform. Everything else lives in the concrete kind.

use crate::paint::PaintSurface;
use crate::viewport::{TransformRef, ViewTransform};
use rkcanvas_core::{Rect, Result, Shared, Vec2};

/// Layer and transform shared by every element kind.
#[derive(Clone)]
pub struct ElementBase {
    layer: i32,
    transform: TransformRef,
}

impl ElementBase {
    pub fn new(layer: i32, transform: TransformRef) -> Self {
        Self { layer, transform }
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn transform(&self) -> &dyn ViewTransform {
        self.transform.as_ref()
    }

    /// Converts a logical rectangle to device space.
    ///
    /// Only the position goes through the transform; sizes arrive already
    /// scaled for the current zoom.
    pub fn to_device_rect(&self, rect: &Rect) -> Rect {
        Rect::new(self.transform.to_device(rect.position), rect.size)
    }
}

impl std::fmt::Debug for ElementBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementBase")
            .field("layer", &self.layer)
            .finish_non_exhaustive()
    }
}

/// Hit-testing, painting and pointer hooks of a canvas element.
///
/// All points are logical coordinates. Every pointer hook returns whether the
/// element consumed the event; the defaults consume nothing.
pub trait CanvasElement {
    fn base(&self) -> &ElementBase;

    fn layer(&self) -> i32 {
        self.base().layer()
    }

    fn hit_test(&self, logical: Vec2) -> bool;

    fn paint(&self, surface: &mut dyn PaintSurface) -> Result<()>;

    fn on_mouse_enter(&mut self, _logical: Vec2) -> bool {
        false
    }

    fn on_mouse_leave(&mut self, _logical: Vec2) -> bool {
        false
    }

    fn on_mouse_move(&mut self, _logical: Vec2) -> bool {
        false
    }

    /// Pointer moved with the button held. `rel` is the movement since the
    /// previous pointer event.
    fn on_mouse_drag(&mut self, _logical: Vec2, _rel: Vec2) -> bool {
        false
    }

    fn on_left_down(&mut self, _logical: Vec2) -> bool {
        false
    }

    fn on_left_up(&mut self, _logical: Vec2) -> bool {
        false
    }

    fn to_device_rect(&self, rect: &Rect) -> Rect {
        self.base().to_device_rect(rect)
    }
}

/// Shared handle to a registered element.
pub type ElementRef = Shared<dyn CanvasElement>;

//! Select box
//!
//! The select box wraps the currently selected nodes in a padded bounding
//! rectangle with eight resize handles. It is a small state machine:
//!
//! - `Idle` → `Moving` on button-down inside the body
//! - `Idle` → `Resizing` on button-down on a handle
//! - back to `Idle` on button-up, which commits the new geometry through the
//!   [`Controller`]
//!
//! While a gesture is active the select box writes member geometry directly
//! into the shared node records on every drag event; the controller only sees
//! the final result.

mod operations;
pub mod types;

pub use types::{HitPart, SelectMode, HANDLE_COUNT};

use crate::controller::Controller;
use crate::element::{CanvasElement, ElementBase};
use crate::model::Node;
use crate::paint::{draw_rect, Border, PaintSurface};
use rkcanvas_core::{bounding_rect, within, Rect, Result, Shared, Theme, Vec2};
use std::rc::Rc;
use types::Gesture;

/// Multi-node move/resize controller.
pub struct SelectBox {
    base: ElementBase,
    theme: Rc<Theme>,
    controller: Rc<dyn Controller>,
    net_index: usize,
    nodes: Vec<Shared<Node>>,
    padding: f64,
    bounding_rect: Rect,
    bounds: Rect,
    gesture: Option<Gesture>,
}

impl SelectBox {
    /// Creates an empty select box. `bounds` limits where members may be
    /// moved or resized to.
    pub fn new(
        base: ElementBase,
        theme: Rc<Theme>,
        controller: Rc<dyn Controller>,
        net_index: usize,
        bounds: Rect,
    ) -> Self {
        let padding = theme.select_outline_padding;
        Self {
            base,
            theme,
            controller,
            net_index,
            nodes: Vec::new(),
            padding,
            bounding_rect: Rect::default(),
            bounds,
            gesture: None,
        }
    }

    /// Replaces the member list and recomputes padding and bounding
    /// rectangle. An active gesture is dropped without committing.
    pub fn update_nodes(&mut self, nodes: Vec<Shared<Node>>) {
        if self.gesture.take().is_some() {
            tracing::warn!("Selection changed during a gesture; gesture dropped");
        }
        self.nodes = nodes;
        self.refresh();
    }

    /// Recomputes the bounding rectangle from the current member geometry.
    pub fn refresh(&mut self) {
        if self.nodes.is_empty() {
            self.bounding_rect = Rect::default();
            return;
        }
        self.padding = self.theme.selection_padding(self.nodes.len());
        let rects: Vec<Rect> = self.nodes.iter().map(|n| n.borrow().rect()).collect();
        self.bounding_rect = bounding_rect(&rects, self.padding);
    }

    pub fn nodes(&self) -> &[Shared<Node>] {
        &self.nodes
    }

    pub fn mode(&self) -> SelectMode {
        self.gesture
            .as_ref()
            .map_or(SelectMode::Idle, Gesture::mode)
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn bounding_rect(&self) -> Rect {
        self.bounding_rect
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Drops the active gesture without committing. Member geometry keeps
    /// whatever the last drag event wrote. Returns false when idle.
    pub fn cancel_gesture(&mut self) -> bool {
        let cancelled = self.gesture.take().is_some();
        if cancelled {
            tracing::debug!("Gesture cancelled");
        }
        cancelled
    }

    /// Logical rectangles of the eight handles, clockwise from the top-left
    /// corner.
    pub fn handle_rects(&self) -> [Rect; HANDLE_COUNT] {
        let pos = self.bounding_rect.position;
        let Vec2 { x: w, y: h } = self.bounding_rect.size;
        let side = self.theme.select_handle_length;
        let centers = [
            pos,
            pos + Vec2::new(w / 2.0, 0.0),
            pos + Vec2::new(w, 0.0),
            pos + Vec2::new(w, h / 2.0),
            pos + Vec2::new(w, h),
            pos + Vec2::new(w / 2.0, h),
            pos + Vec2::new(0.0, h),
            pos + Vec2::new(0.0, h / 2.0),
        ];
        centers.map(|c| Rect::new(c - Vec2::repeat(side / 2.0), Vec2::repeat(side)))
    }

    /// Classifies `logical` as a handle, the body or outside.
    pub fn classify(&self, logical: Vec2) -> HitPart {
        if self.nodes.is_empty() {
            return HitPart::Outside;
        }
        if let Some(i) = self
            .handle_rects()
            .iter()
            .position(|r| within(logical, r))
        {
            return HitPart::Handle(i);
        }
        if within(logical, &self.bounding_rect) {
            HitPart::Body
        } else {
            HitPart::Outside
        }
    }
}

impl CanvasElement for SelectBox {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn hit_test(&self, logical: Vec2) -> bool {
        self.classify(logical) != HitPart::Outside
    }

    fn paint(&self, surface: &mut dyn PaintSurface) -> Result<()> {
        if self.nodes.is_empty() {
            return Ok(());
        }
        let color = self.theme.select_box_color;
        let outline = self.to_device_rect(&self.bounding_rect);
        draw_rect(
            surface,
            outline,
            None,
            Some(Border::new(color, self.theme.select_outline_width)),
        )?;
        for handle in self.handle_rects() {
            surface.fill_rect(self.to_device_rect(&handle), color);
        }
        Ok(())
    }

    fn on_left_down(&mut self, logical: Vec2) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        if self.gesture.take().is_some() {
            tracing::warn!("Button-down during a gesture; previous gesture dropped");
        }
        match self.classify(logical) {
            HitPart::Handle(handle) => {
                self.begin_resize(handle);
                true
            }
            HitPart::Body => {
                self.begin_move(logical);
                true
            }
            HitPart::Outside => false,
        }
    }

    /// # Panics
    ///
    /// Panics when no gesture is active.
    fn on_mouse_drag(&mut self, logical: Vec2, _rel: Vec2) -> bool {
        let Some(gesture) = self.gesture.take() else {
            panic!("select box dragged while idle");
        };
        match &gesture {
            Gesture::Moving(snap) => self.apply_move(snap, logical),
            Gesture::Resizing(snap) => self.apply_resize(snap, logical),
        }
        self.gesture = Some(gesture);
        true
    }

    fn on_left_up(&mut self, _logical: Vec2) -> bool {
        match self.gesture.take() {
            Some(gesture) => {
                self.commit(&gesture);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for SelectBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectBox")
            .field("mode", &self.mode())
            .field("nodes", &self.nodes.len())
            .field("padding", &self.padding)
            .field("bounding_rect", &self.bounding_rect)
            .field("bounds", &self.bounds)
            .finish()
    }
}

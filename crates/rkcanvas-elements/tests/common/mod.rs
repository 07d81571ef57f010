//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use rkcanvas_core::{shared, Color, Rect, Result, Shared, Theme, Vec2};
use rkcanvas_elements::{
    CanvasElement, ElementBase, Node, PaintSurface, ReactionCurve, RecordingController,
    SelectBox, ViewTransform, SELECT_BOX_LAYER,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Straight segment with a fixed pick tolerance.
#[derive(Debug)]
pub struct SegmentCurve {
    pub from: Vec2,
    pub to: Vec2,
    pub tolerance: f64,
}

impl SegmentCurve {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self {
            from,
            to,
            tolerance: 3.0,
        }
    }
}

impl ReactionCurve for SegmentCurve {
    fn is_point_near(&self, logical: Vec2) -> bool {
        let d = self.to - self.from;
        let len2 = d.x * d.x + d.y * d.y;
        let t = if len2 > 0.0 {
            (((logical.x - self.from.x) * d.x + (logical.y - self.from.y) * d.y) / len2)
                .clamp(0.0, 1.0)
        } else {
            0.0
        };
        let closest = self.from + d * t;
        let off = logical - closest;
        (off.x * off.x + off.y * off.y).sqrt() <= self.tolerance
    }

    fn centroid(&self) -> Vec2 {
        (self.from + self.to) / 2.0
    }

    fn paint(
        &self,
        surface: &mut dyn PaintSurface,
        color: Color,
        transform: &dyn ViewTransform,
        selected: bool,
    ) -> Result<()> {
        let base = if selected { 2.0 } else { 1.0 };
        let width = base * transform.scale();
        let points = [transform.to_device(self.from), transform.to_device(self.to)];
        surface.stroke_polyline(&points, color, width);
        Ok(())
    }
}

pub fn node(index: usize, x: f64, y: f64, w: f64, h: f64) -> Node {
    Node::new(index, format!("n{index}"), Vec2::new(x, y), Vec2::new(w, h))
}

pub fn identity() -> Rc<dyn ViewTransform> {
    Rc::new(|p: Vec2| p)
}

/// A select box over `nodes`, with the recording controller it commits to and
/// the shared node records it edits.
pub struct Fixture {
    pub select_box: SelectBox,
    pub controller: Rc<RecordingController>,
    pub nodes: Vec<Shared<Node>>,
}

impl Fixture {
    pub fn new(nodes: Vec<Node>, bounds: Rect) -> Self {
        Self::with_theme(nodes, bounds, Theme::default())
    }

    pub fn with_theme(nodes: Vec<Node>, bounds: Rect, theme: Theme) -> Self {
        let controller = Rc::new(RecordingController::new());
        let mut select_box = SelectBox::new(
            ElementBase::new(SELECT_BOX_LAYER, identity()),
            Rc::new(theme),
            controller.clone(),
            0,
            bounds,
        );
        let nodes: Vec<Shared<Node>> = nodes.into_iter().map(shared).collect();
        select_box.update_nodes(nodes.clone());
        Self {
            select_box,
            controller,
            nodes,
        }
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.nodes.iter().map(|n| n.borrow().position).collect()
    }

    pub fn sizes(&self) -> Vec<Vec2> {
        self.nodes.iter().map(|n| n.borrow().size).collect()
    }

    /// Presses on the centre of handle `handle`.
    pub fn grab_handle(&mut self, handle: usize) -> Vec2 {
        let at = self.select_box.handle_rects()[handle].center();
        assert!(self.select_box.on_left_down(at));
        at
    }

    pub fn drag_to(&mut self, to: Vec2) {
        assert!(self.select_box.on_mouse_drag(to, Vec2::zero()));
    }
}

/// Element that records which hooks it received.
pub struct HookRecorder {
    base: ElementBase,
    pub area: Rect,
    pub consume: bool,
    pub log: Rc<RefCell<Vec<String>>>,
    pub name: &'static str,
}

impl HookRecorder {
    pub fn new(
        layer: i32,
        area: Rect,
        consume: bool,
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    ) -> Self {
        Self {
            base: ElementBase::new(layer, identity()),
            area,
            consume,
            log,
            name,
        }
    }

    fn record(&self, hook: &str) -> bool {
        self.log.borrow_mut().push(format!("{}:{}", self.name, hook));
        self.consume
    }
}

impl CanvasElement for HookRecorder {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn hit_test(&self, logical: Vec2) -> bool {
        self.area.contains(logical)
    }

    fn paint(&self, surface: &mut dyn PaintSurface) -> Result<()> {
        surface.stroke_rect(self.area, Color::BLACK, 1.0);
        Ok(())
    }

    fn on_mouse_enter(&mut self, _logical: Vec2) -> bool {
        self.record("enter")
    }

    fn on_mouse_leave(&mut self, _logical: Vec2) -> bool {
        self.record("leave")
    }

    fn on_mouse_move(&mut self, _logical: Vec2) -> bool {
        self.record("move")
    }

    fn on_mouse_drag(&mut self, _logical: Vec2, _rel: Vec2) -> bool {
        self.record("drag")
    }

    fn on_left_down(&mut self, _logical: Vec2) -> bool {
        self.record("down")
    }

    fn on_left_up(&mut self, _logical: Vec2) -> bool {
        self.record("up")
    }
}

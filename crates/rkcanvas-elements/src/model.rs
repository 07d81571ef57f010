//! Domain shapes drawn on the canvas.
//!
//! Nodes carry their own geometry; reactions delegate all curve geometry to a
//! [`ReactionCurve`] collaborator and only expose what the canvas needs from
//! it: a proximity predicate, a centroid, and painting.

use crate::paint::PaintSurface;
use crate::viewport::ViewTransform;
use rkcanvas_core::{Color, Rect, Result, Vec2};
use std::fmt;

/// A network node with an axis-aligned rectangular shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Index of the node within its network, as known by the controller
    pub index: usize,
    /// Display identifier, drawn as the node label
    pub id: String,
    pub position: Vec2,
    pub size: Vec2,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl Node {
    /// Creates a node with the default node colors.
    pub fn new(index: usize, id: impl Into<String>, position: Vec2, size: Vec2) -> Self {
        Self {
            index,
            id: id.into(),
            position,
            size,
            fill_color: Color::rgb(255, 204, 153),
            border_color: Color::rgb(255, 108, 9),
            border_width: 1.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// Curve geometry of a reaction, owned by the reaction model.
pub trait ReactionCurve: fmt::Debug {
    /// True if `logical` is within the curve's pick tolerance.
    fn is_point_near(&self, logical: Vec2) -> bool;

    /// Point where the reactant and product branches meet.
    fn centroid(&self) -> Vec2;

    /// Draws the curve itself.
    fn paint(
        &self,
        surface: &mut dyn PaintSurface,
        color: Color,
        transform: &dyn ViewTransform,
        selected: bool,
    ) -> Result<()>;
}

/// A reaction between nodes, drawn as a curve with a centroid dot.
#[derive(Debug)]
pub struct Reaction {
    pub index: usize,
    pub id: String,
    pub fill_color: Color,
    pub curve: Box<dyn ReactionCurve>,
}

impl Reaction {
    pub fn new(index: usize, id: impl Into<String>, curve: Box<dyn ReactionCurve>) -> Self {
        Self {
            index,
            id: id.into(),
            fill_color: Color::rgb(91, 176, 253),
            curve,
        }
    }
}

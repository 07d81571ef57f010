//! Select box type definitions: SelectMode, HitPart, and the per-gesture
//! snapshots.

use rkcanvas_core::{Rect, Vec2};

/// Number of resize handles around the bounding rectangle.
pub const HANDLE_COUNT: usize = 8;

/// Sizes below this are treated as zero by the resize ratio guards.
pub(crate) const DEGENERATE_EPSILON: f64 = 1e-6;

/// Current gesture of the select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Idle,
    Moving,
    Resizing,
}

/// Result of classifying a point against the select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// A resize handle, numbered clockwise from the top-left corner.
    /// Even numbers are corners, odd numbers edge midpoints.
    Handle(usize),
    /// Inside the bounding rectangle but on no handle.
    Body,
    Outside,
}

/// State captured when a move starts.
#[derive(Debug, Clone)]
pub(crate) struct MoveSnapshot {
    /// Offset of each member's position from the pointer
    pub rel_positions: Vec<Vec2>,
    /// Offset of the bounding rectangle's position from the pointer
    pub rect_offset: Vec2,
}

/// State captured when a resize starts.
#[derive(Debug, Clone)]
pub(crate) struct ResizeSnapshot {
    pub handle: usize,
    /// Per-axis floor for the scale ratio
    pub min_ratio: Vec2,
    pub orig_rect: Rect,
    pub orig_positions: Vec<Vec2>,
    pub orig_sizes: Vec<Vec2>,
}

impl ResizeSnapshot {
    /// Axis that an edge-midpoint handle leaves untouched: top and bottom
    /// handles keep x, left and right handles keep y. Corners keep nothing.
    pub fn frozen_axis(&self) -> Option<usize> {
        match self.handle % 4 {
            1 => Some(0),
            3 => Some(1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Gesture {
    Moving(MoveSnapshot),
    Resizing(ResizeSnapshot),
}

impl Gesture {
    pub fn mode(&self) -> SelectMode {
        match self {
            Gesture::Moving(_) => SelectMode::Moving,
            Gesture::Resizing(_) => SelectMode::Resizing,
        }
    }
}

/// Bounding rectangle and per-axis ratio produced by one resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResizeStep {
    pub rect: Rect,
    pub ratio: Vec2,
    /// Axes on which every member keeps its gesture-start geometry
    pub frozen: [bool; 2],
}

//! Axis-aligned rectangle.

use super::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle described by its top-left position and size.
///
/// Sizes are expected to be non-negative. Every mutation performed by this
/// workspace preserves that; constructing a negative rectangle is a
/// programming error caught by a debug assertion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from position and size.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        debug_assert!(
            size.x >= 0.0 && size.y >= 0.0,
            "rectangle size must be non-negative, got {size}"
        );
        Self { position, size }
    }

    /// Creates a rectangle from scalar coordinates.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Bottom-right corner.
    pub fn end(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Returns `(position, size)`.
    pub fn as_tuple(&self) -> (Vec2, Vec2) {
        (self.position, self.size)
    }

    /// Returns the n-th corner, clockwise from the top-left.
    ///
    /// 0 = top-left, 1 = top-right, 2 = bottom-right, 3 = bottom-left.
    ///
    /// # Panics
    ///
    /// Panics if `n > 3`.
    pub fn nth_vertex(&self, n: usize) -> Vec2 {
        match n {
            0 => self.position,
            1 => self.position + Vec2::new(self.size.x, 0.0),
            2 => self.position + self.size,
            3 => self.position + Vec2::new(0.0, self.size.y),
            _ => panic!("rectangle vertex index out of range: {n}"),
        }
    }

    /// Inclusive containment test, same as [`within`](super::within).
    pub fn contains(&self, point: Vec2) -> bool {
        super::within(point, self)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect[{} {}x{}]", self.position, self.size.x, self.size.y)
    }
}

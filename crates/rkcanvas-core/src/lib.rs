//! # RKCanvas Core
//!
//! Core types and utilities for RKCanvas.
//! Provides the geometry primitives, observable selection sets, the error
//! taxonomy and the theme configuration shared by every canvas element.

pub mod error;
pub mod geometry;
pub mod observer;
pub mod theme;
pub mod types;

pub use error::{CanvasError, ConfigError, Result};

pub use geometry::{
    bounding_rect, clamp_point, clamp_rect_pos, padded_rect, rects_intersect, within, Rect, Vec2,
};

pub use observer::{ObserverId, SetSubject, Subject};

pub use theme::{Color, Theme};

pub use types::{shared, shared_index_set, shared_vec, Shared, SharedIndexSet, SharedVec};

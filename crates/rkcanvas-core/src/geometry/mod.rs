//! Geometry utilities
//!
//! Pure functions over positions and rectangles:
//! - Inclusive point containment ([`within`])
//! - Padded bounding rectangles ([`bounding_rect`], [`padded_rect`])
//! - Clamping into a bounding region ([`clamp_point`], [`clamp_rect_pos`])
//! - Strict rectangle intersection ([`rects_intersect`])

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;

/// Returns true if `point` lies within `rect`, edges included.
pub fn within(point: Vec2, rect: &Rect) -> bool {
    let end = rect.end();
    point.x >= rect.position.x && point.y >= rect.position.y && point.x <= end.x && point.y <= end.y
}

/// Computes the smallest rectangle containing every input rectangle, grown by
/// `padding` on every side.
///
/// # Panics
///
/// Panics if `rects` is empty; a bounding rectangle of nothing is undefined.
pub fn bounding_rect<'a, I>(rects: I, padding: f64) -> Rect
where
    I: IntoIterator<Item = &'a Rect>,
{
    let mut iter = rects.into_iter();
    let first = iter
        .next()
        .unwrap_or_else(|| panic!("bounding_rect requires at least one rectangle"));

    let (min, max) = iter.fold((first.position, first.end()), |(min, max), r| {
        (min.elem_min(r.position), max.elem_max(r.end()))
    });

    let pad = Vec2::repeat(padding);
    Rect::new(min - pad, max - min + pad * 2.0)
}

/// Returns `rect` grown outward by `padding` on every side.
pub fn padded_rect(rect: &Rect, padding: f64) -> Rect {
    let pad = Vec2::repeat(padding);
    Rect::new(rect.position - pad, rect.size + pad * 2.0)
}

/// Clamps each axis of `point` into `[bounds.min + padding, bounds.max - padding]`.
///
/// Left is applied before right and top before bottom, so with degenerate
/// bounds the far edge wins.
pub fn clamp_point(point: Vec2, bounds: &Rect, padding: f64) -> Vec2 {
    let topleft = bounds.position + Vec2::repeat(padding);
    let botright = bounds.end() - Vec2::repeat(padding);

    let mut ret = point;
    ret.x = ret.x.max(topleft.x);
    ret.x = ret.x.min(botright.x);
    ret.y = ret.y.max(topleft.y);
    ret.y = ret.y.min(botright.y);
    ret
}

/// Clamps the position of `rect` so that the whole rectangle stays inside
/// `bounds` shrunk by `padding`.
pub fn clamp_rect_pos(rect: &Rect, bounds: &Rect, padding: f64) -> Vec2 {
    let topleft = bounds.position + Vec2::repeat(padding);
    let botright = bounds.end() - rect.size - Vec2::repeat(padding);

    let mut ret = rect.position;
    ret.x = ret.x.max(topleft.x);
    ret.x = ret.x.min(botright.x);
    ret.y = ret.y.max(topleft.y);
    ret.y = ret.y.min(botright.y);
    ret
}

/// Separating-axis test. Rectangles that only touch do not intersect.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    let a_end = a.end();
    let b_end = b.end();

    for axis in 0..2 {
        if a_end[axis] <= b.position[axis] || b_end[axis] <= a.position[axis] {
            return false;
        }
    }
    true
}

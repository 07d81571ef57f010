//! Select box operations: gesture start, per-event move and resize, and the
//! commit on release.

use super::types::{
    Gesture, MoveSnapshot, ResizeSnapshot, ResizeStep, SelectMode, DEGENERATE_EPSILON,
};
use super::SelectBox;
use rkcanvas_core::{clamp_point, Rect, Vec2};

impl SelectBox {
    pub(super) fn begin_move(&mut self, pointer: Vec2) {
        let rel_positions = self
            .nodes
            .iter()
            .map(|n| n.borrow().position - pointer)
            .collect();
        self.gesture = Some(Gesture::Moving(MoveSnapshot {
            rel_positions,
            rect_offset: self.bounding_rect.position - pointer,
        }));
        tracing::debug!("Move started with {} nodes at {}", self.nodes.len(), pointer);
    }

    pub(super) fn begin_resize(&mut self, handle: usize) {
        let orig_positions: Vec<Vec2> = self.nodes.iter().map(|n| n.borrow().position).collect();
        let orig_sizes: Vec<Vec2> = self.nodes.iter().map(|n| n.borrow().size).collect();

        let min_dims = orig_sizes
            .iter()
            .fold(Vec2::repeat(f64::INFINITY), |acc, s| acc.elem_min(*s));
        let min_ratio = Vec2::new(
            floor_ratio(self.theme.min_node_width, min_dims.x),
            floor_ratio(self.theme.min_node_height, min_dims.y),
        );

        self.gesture = Some(Gesture::Resizing(ResizeSnapshot {
            handle,
            min_ratio,
            orig_rect: self.bounding_rect,
            orig_positions,
            orig_sizes,
        }));
        tracing::debug!(
            "Resize started on handle {} with {} nodes (min ratio {})",
            handle,
            self.nodes.len(),
            min_ratio
        );
    }

    /// Translates every member rigidly so the pointer keeps its grip offset,
    /// shifting the whole group back inside the bounds if needed.
    pub(super) fn apply_move(&mut self, snap: &MoveSnapshot, pointer: Vec2) {
        let candidates: Vec<Vec2> = snap.rel_positions.iter().map(|rel| pointer + *rel).collect();

        let mut min = Vec2::repeat(f64::INFINITY);
        let mut max = Vec2::repeat(f64::NEG_INFINITY);
        for (node, pos) in self.nodes.iter().zip(&candidates) {
            let size = node.borrow().size;
            min = min.elem_min(*pos);
            max = max.elem_max(*pos + size);
        }

        let offset = confine_offset(min, max, &self.bounds);
        for (node, pos) in self.nodes.iter().zip(&candidates) {
            node.borrow_mut().position = *pos + offset;
        }
        self.bounding_rect.position = pointer + snap.rect_offset + offset;

        tracing::trace!("Move to {} (correction {})", pointer, offset);
    }

    /// Rescales every member relative to the corner opposite the dragged
    /// handle.
    pub(super) fn apply_resize(&mut self, snap: &ResizeSnapshot, pointer: Vec2) {
        let step = resize_step(snap, &self.bounding_rect, pointer, &self.bounds, self.padding);
        let pad = Vec2::repeat(self.padding);

        for (i, node) in self.nodes.iter().enumerate() {
            let orig_pos = snap.orig_positions[i];
            let orig_size = snap.orig_sizes[i];
            let offset = orig_pos - snap.orig_rect.position - pad;

            let mut position = step.rect.position + offset.elem_mul(step.ratio) + pad;
            let mut size = orig_size.elem_mul(step.ratio);
            for axis in 0..2 {
                if step.frozen[axis] {
                    position = position.swapped(axis, orig_pos[axis]);
                    size = size.swapped(axis, orig_size[axis]);
                }
            }

            let mut node = node.borrow_mut();
            node.position = position;
            node.size = size;
        }
        self.bounding_rect = step.rect;

        tracing::trace!("Resize to {} (ratio {})", step.rect, step.ratio);
    }

    /// Hands the final geometry of every member to the controller inside one
    /// undo group.
    pub(super) fn commit(&self, gesture: &Gesture) {
        if self.nodes.is_empty() {
            return;
        }
        let resizing = gesture.mode() == SelectMode::Resizing;
        let geometry: Vec<(usize, Vec2, Vec2)> = self
            .nodes
            .iter()
            .map(|n| {
                let n = n.borrow();
                (n.index, n.position, n.size)
            })
            .collect();

        let controller = &self.controller;
        controller.try_start_group();
        for (index, position, size) in geometry {
            if !controller.try_move_node(self.net_index, index, position) {
                tracing::warn!("Controller rejected move of node {}", index);
            }
            if resizing && !controller.try_set_node_size(self.net_index, index, size) {
                tracing::warn!("Controller rejected resize of node {}", index);
            }
        }
        controller.try_end_group();

        tracing::debug!(
            "Committed {:?} of {} nodes in network {}",
            gesture.mode(),
            self.nodes.len(),
            self.net_index
        );
    }
}

/// Smallest scale ratio that keeps a member of size `smallest` at or above
/// `minimum`. A zero-size member cannot be scaled meaningfully, so its axis
/// is pinned at 1.0.
fn floor_ratio(minimum: f64, smallest: f64) -> f64 {
    if smallest > DEGENERATE_EPSILON {
        minimum / smallest
    } else {
        1.0
    }
}

/// Computes the bounding rectangle for one resize drag event.
///
/// `current` is the bounding rectangle after the previous event; it is only
/// consulted when the pointer crosses the fixed corner.
pub(crate) fn resize_step(
    snap: &ResizeSnapshot,
    current: &Rect,
    pointer: Vec2,
    bounds: &Rect,
    padding: f64,
) -> ResizeStep {
    let dragged = snap.handle / 2;
    let fixed = snap.orig_rect.nth_vertex((dragged + 2) % 4);
    let orig_dragged = snap.orig_rect.nth_vertex(dragged);
    let cur_dragged = current.nth_vertex(dragged);

    let double_pad = Vec2::repeat(padding * 2.0);
    let orig_delta = orig_dragged - fixed;
    let orig_content = orig_delta.elem_abs() - double_pad;

    let mut frozen = [false; 2];
    if let Some(axis) = snap.frozen_axis() {
        frozen[axis] = true;
    }
    for (axis, slot) in frozen.iter_mut().enumerate() {
        if orig_content[axis] <= DEGENERATE_EPSILON {
            *slot = true;
        }
    }

    let mut target = pointer;
    for axis in 0..2 {
        if frozen[axis] {
            target = target.swapped(axis, orig_dragged[axis]);
        }
    }
    target = clamp_point(target, bounds, 0.0);

    // dragging past the fixed corner would invert the rectangle
    let target_delta = target - fixed;
    for axis in 0..2 {
        if orig_delta[axis] * target_delta[axis] < 0.0 {
            target = target.swapped(axis, cur_dragged[axis]);
        }
    }

    let target_content = (target - fixed).elem_abs() - double_pad;
    let mut ratio = Vec2::repeat(1.0);
    for axis in 0..2 {
        if frozen[axis] {
            continue;
        }
        let mut r = target_content[axis] / orig_content[axis];
        if r < snap.min_ratio[axis] {
            r = snap.min_ratio[axis];
            // park the dragged corner where the floor puts it
            let extent = orig_content[axis] * r + double_pad[axis];
            target = target.swapped(axis, fixed[axis] + extent.copysign(orig_delta[axis]));
        }
        ratio = ratio.swapped(axis, r);
    }

    let content = orig_content.elem_mul(ratio);
    let mut position = fixed.elem_min(target);
    let mut size = content + double_pad;
    for axis in 0..2 {
        if frozen[axis] {
            position = position.swapped(axis, snap.orig_rect.position[axis]);
            size = size.swapped(axis, snap.orig_rect.size[axis]);
        }
    }

    // a floor above 1.0 can grow the members past the bounds
    let pad = Vec2::repeat(padding);
    let correction = confine_offset(position + pad, position + size - pad, bounds);
    for axis in 0..2 {
        if !frozen[axis] && correction[axis] != 0.0 {
            position = position.swapped(axis, position[axis] + correction[axis]);
        }
    }

    ResizeStep {
        rect: Rect::new(position, size),
        ratio,
        frozen,
    }
}

/// Uniform correction that brings the extent `[min, max]` back inside
/// `bounds`. An extent wider than the bounds is aligned to the leading edge.
pub(crate) fn confine_offset(min: Vec2, max: Vec2, bounds: &Rect) -> Vec2 {
    let lo = bounds.position;
    let hi = bounds.end();

    let mut offset = Vec2::zero();
    for axis in 0..2 {
        let correction = if min[axis] < lo[axis] {
            lo[axis] - min[axis]
        } else if max[axis] > hi[axis] {
            hi[axis] - max[axis]
        } else {
            0.0
        };
        if max[axis] - min[axis] > hi[axis] - lo[axis] {
            tracing::warn!(
                "Selection spans {:.2} on axis {} but bounds only allow {:.2}",
                max[axis] - min[axis],
                axis,
                hi[axis] - lo[axis]
            );
        }
        offset = offset.swapped(axis, correction);
    }
    offset
}

//! Controller collaborator
//!
//! The select box never persists geometry itself. On release it hands the
//! final position (and size, for a resize) of every member to a
//! [`Controller`], wrapped in one undo group.

use rkcanvas_core::Vec2;
use std::cell::RefCell;

/// Undoable edit sink for node geometry.
///
/// Every method reports whether the call was accepted; a controller is
/// expected to log and ignore invalid indices itself.
pub trait Controller {
    /// Opens an undo group. Calls until the matching
    /// [`try_end_group`](Controller::try_end_group) undo as one step.
    fn try_start_group(&self) -> bool;

    /// Closes the current undo group.
    fn try_end_group(&self) -> bool;

    fn try_move_node(&self, net_index: usize, node_index: usize, position: Vec2) -> bool;

    fn try_set_node_size(&self, net_index: usize, node_index: usize, size: Vec2) -> bool;
}

/// A call received by a [`RecordingController`].
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerCall {
    StartGroup,
    EndGroup,
    MoveNode {
        net_index: usize,
        node_index: usize,
        position: Vec2,
    },
    SetNodeSize {
        net_index: usize,
        node_index: usize,
        size: Vec2,
    },
}

/// Controller that accepts everything and records the calls in order.
#[derive(Debug, Default)]
pub struct RecordingController {
    calls: RefCell<Vec<ControllerCall>>,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ControllerCall> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<ControllerCall> {
        self.calls.take()
    }

    fn record(&self, call: ControllerCall) -> bool {
        tracing::trace!("Controller call: {:?}", call);
        self.calls.borrow_mut().push(call);
        true
    }
}

impl Controller for RecordingController {
    fn try_start_group(&self) -> bool {
        self.record(ControllerCall::StartGroup)
    }

    fn try_end_group(&self) -> bool {
        self.record(ControllerCall::EndGroup)
    }

    fn try_move_node(&self, net_index: usize, node_index: usize, position: Vec2) -> bool {
        self.record(ControllerCall::MoveNode {
            net_index,
            node_index,
            position,
        })
    }

    fn try_set_node_size(&self, net_index: usize, node_index: usize, size: Vec2) -> bool {
        self.record(ControllerCall::SetNodeSize {
            net_index,
            node_index,
            size,
        })
    }
}

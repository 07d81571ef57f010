//! Type aliases for the single-threaded sharing used across the canvas.
//!
//! Node records are read by their node element and written by the select box
//! during a gesture, so both hold a [`Shared`] handle to the same record. All
//! access happens on the event thread; a multi-threaded embedding must wrap
//! each canvas in its own lock instead of sharing these handles.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Single-threaded shared ownership with interior mutability.
///
/// # Example
/// ```rust
/// use rkcanvas_core::types::{shared, Shared};
///
/// let value: Shared<i32> = shared(1);
/// *value.borrow_mut() += 1;
/// assert_eq!(*value.borrow(), 2);
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared list, such as the node records of one canvas.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// A shared set of indices, used as the read side of a selection.
pub type SharedIndexSet = Rc<RefCell<HashSet<usize>>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new empty `SharedVec<T>`.
#[inline]
pub fn shared_vec<T>() -> SharedVec<T> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Create a new empty `SharedIndexSet`.
#[inline]
pub fn shared_index_set() -> SharedIndexSet {
    Rc::new(RefCell::new(HashSet::new()))
}

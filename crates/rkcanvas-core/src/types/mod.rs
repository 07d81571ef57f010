//! Type aliases for shared ownership.
//!
//! - [`aliases`]: `Rc<RefCell<T>>` wrappers used for node geometry shared
//!   between node elements and the select box.

pub mod aliases;

pub use aliases::*;

//! # RKCanvas Elements
//!
//! The interactive part of a reaction-network canvas: element kinds, the
//! z-ordered registry that resolves pointer positions to elements, and the
//! select box that moves and resizes groups of nodes.
//!
//! ## Architecture
//!
//! ```text
//! Canvas (event router)
//!   ├── LayeredElements (ordered by layer, then insertion)
//!   │     ├── ReactionElement   REACTION_LAYER
//!   │     ├── NodeElement       NODE_LAYER
//!   │     └── SelectBox         SELECT_BOX_LAYER
//!   ├── SetSubject<usize> (node / reaction selection)
//!   └── Viewport (logical → device transform)
//!
//! Collaborators
//!   ├── PaintSurface  (rendering backend)
//!   └── Controller    (undoable geometry commits)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rkcanvas_core::{Rect, Theme, Vec2};
//! use rkcanvas_elements::{Canvas, Node, RecordingController, RecordingSurface, Viewport};
//! use std::collections::HashSet;
//! use std::rc::Rc;
//!
//! let controller = Rc::new(RecordingController::new());
//! let mut canvas = Canvas::new(
//!     Rc::new(Theme::default()),
//!     Rc::new(Viewport::new()),
//!     controller.clone(),
//!     0,
//!     Rect::from_xywh(0.0, 0.0, 800.0, 600.0),
//! );
//! canvas.reset(
//!     vec![Node::new(0, "glucose", Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0))],
//!     Vec::new(),
//! );
//! canvas.select_nodes(HashSet::from([0]));
//!
//! // drag the node by its body
//! assert!(canvas.on_left_down(Vec2::new(30.0, 20.0)));
//! canvas.on_mouse_move(Vec2::new(130.0, 20.0), true);
//! assert!(canvas.on_left_up(Vec2::new(130.0, 20.0)));
//! assert_eq!(controller.calls().len(), 3);
//!
//! let mut surface = RecordingSurface::new();
//! canvas.paint(&mut surface).unwrap();
//! ```

pub mod canvas;
pub mod controller;
pub mod element;
pub mod layered;
pub mod model;
pub mod node_element;
pub mod paint;
pub mod reaction_element;
pub mod select_box;
pub mod viewport;

pub use canvas::{Canvas, NODE_LAYER, REACTION_LAYER, SELECT_BOX_LAYER};
pub use controller::{Controller, ControllerCall, RecordingController};
pub use element::{CanvasElement, ElementBase, ElementRef};
pub use layered::LayeredElements;
pub use model::{Node, Reaction, ReactionCurve};
pub use node_element::NodeElement;
pub use paint::{draw_rect, Border, DrawCommand, PaintSurface, RecordingSurface};
pub use reaction_element::ReactionElement;
pub use select_box::{HitPart, SelectBox, SelectMode, HANDLE_COUNT};
pub use viewport::{TransformRef, ViewTransform, Viewport};

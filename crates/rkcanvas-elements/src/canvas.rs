//! Canvas event router
//!
//! Owns the element registry, the select box singleton, the selection sets
//! and the viewport of one canvas view. Pointer events are routed top-down to
//! the first element that consumes them; painting goes bottom-up.

use crate::controller::Controller;
use crate::element::{ElementBase, ElementRef};
use crate::layered::LayeredElements;
use crate::model::{Node, Reaction};
use crate::node_element::NodeElement;
use crate::paint::PaintSurface;
use crate::reaction_element::ReactionElement;
use crate::select_box::SelectBox;
use crate::viewport::{TransformRef, Viewport};
use rkcanvas_core::{
    shared, shared_index_set, shared_vec, ObserverId, Rect, Result, SetSubject, Shared,
    SharedIndexSet, SharedVec, Theme, Vec2,
};
use std::collections::HashSet;
use std::rc::Rc;

pub const REACTION_LAYER: i32 = 1;
pub const NODE_LAYER: i32 = 2;
pub const SELECT_BOX_LAYER: i32 = 10;

/// Members of the select box for a selection: the selected nodes in model
/// order.
fn selected_members(nodes: &[Shared<Node>], selected: &HashSet<usize>) -> Vec<Shared<Node>> {
    nodes
        .iter()
        .filter(|n| selected.contains(&n.borrow().index))
        .cloned()
        .collect()
}

/// One interactive canvas view.
pub struct Canvas {
    theme: Rc<Theme>,
    viewport: Rc<Viewport>,
    elements: LayeredElements,
    nodes: SharedVec<Shared<Node>>,
    select_box: Shared<SelectBox>,
    selected_nodes: SetSubject<usize>,
    selected_reactions: SetSubject<usize>,
    node_highlight: SharedIndexSet,
    reaction_highlight: SharedIndexSet,
    overlays: Vec<ElementRef>,
    hovered: Option<ElementRef>,
    drag_target: Option<ElementRef>,
    last_pointer: Option<Vec2>,
}

impl Canvas {
    pub fn new(
        theme: Rc<Theme>,
        viewport: Rc<Viewport>,
        controller: Rc<dyn Controller>,
        net_index: usize,
        bounds: Rect,
    ) -> Self {
        let select_box = shared(SelectBox::new(
            ElementBase::new(SELECT_BOX_LAYER, viewport.clone()),
            theme.clone(),
            controller,
            net_index,
            bounds,
        ));
        let nodes = shared_vec();
        let node_highlight = shared_index_set();
        let reaction_highlight = shared_index_set();

        let mut selected_nodes = SetSubject::new();
        {
            let nodes = nodes.clone();
            let select_box = select_box.clone();
            let highlight = node_highlight.clone();
            selected_nodes.attach(move |selected: &HashSet<usize>| {
                *highlight.borrow_mut() = selected.clone();
                let members = selected_members(&nodes.borrow(), selected);
                select_box.borrow_mut().update_nodes(members);
            });
        }

        let mut selected_reactions = SetSubject::new();
        {
            let highlight = reaction_highlight.clone();
            selected_reactions.attach(move |selected: &HashSet<usize>| {
                *highlight.borrow_mut() = selected.clone();
            });
        }

        let mut canvas = Self {
            theme,
            viewport,
            elements: LayeredElements::new(),
            nodes,
            select_box,
            selected_nodes,
            selected_reactions,
            node_highlight,
            reaction_highlight,
            overlays: Vec::new(),
            hovered: None,
            drag_target: None,
            last_pointer: None,
        };
        canvas.rebuild(Vec::new());
        canvas
    }

    /// Rebuilds every element from a fresh model. Selected nodes that are
    /// gone from the model are deselected; the rest stay selected and the
    /// select box picks up their new records.
    pub fn reset(&mut self, nodes: Vec<Node>, reactions: Vec<Reaction>) {
        self.abort_drag();
        self.hovered = None;
        *self.nodes.borrow_mut() = nodes.into_iter().map(shared).collect();
        self.rebuild(reactions);

        let kept: HashSet<usize> = self
            .nodes
            .borrow()
            .iter()
            .map(|n| n.borrow().index)
            .filter(|index| self.selected_nodes.contains(index))
            .collect();
        let dropped = self.selected_nodes.len() - kept.len();
        if self.selected_nodes.replace(kept) {
            tracing::debug!("Reset deselected {} missing nodes", dropped);
        } else {
            let members = selected_members(&self.nodes.borrow(), self.selected_nodes.item());
            self.select_box.borrow_mut().update_nodes(members);
        }
    }

    fn rebuild(&mut self, reactions: Vec<Reaction>) {
        self.elements.clear();
        let transform: TransformRef = self.viewport.clone();
        let reaction_count = reactions.len();

        for reaction in reactions {
            let element = ReactionElement::new(
                ElementBase::new(REACTION_LAYER, transform.clone()),
                reaction,
                self.reaction_highlight.clone(),
                self.theme.clone(),
            );
            self.elements.add(shared(element));
        }
        for node in self.nodes.borrow().iter() {
            let element = NodeElement::new(
                ElementBase::new(NODE_LAYER, transform.clone()),
                node.clone(),
                self.node_highlight.clone(),
                self.theme.clone(),
            );
            self.elements.add(shared(element));
        }
        let select_box: ElementRef = self.select_box.clone();
        self.elements.add(select_box);
        for overlay in &self.overlays {
            self.elements.add(overlay.clone());
        }

        tracing::debug!(
            "Canvas rebuilt: {} nodes, {} reactions",
            self.nodes.borrow().len(),
            reaction_count
        );
    }

    /// Registers an element that lives outside the model, such as a tooltip
    /// or a rubber band. Overlays survive [`reset`](Canvas::reset).
    pub fn add_overlay(&mut self, element: ElementRef) {
        self.overlays.push(element.clone());
        self.elements.add(element);
    }

    /// Ends any drag without committing.
    fn abort_drag(&mut self) {
        self.drag_target = None;
        self.select_box.borrow_mut().cancel_gesture();
    }

    pub fn on_left_down(&mut self, logical: Vec2) -> bool {
        self.last_pointer = Some(logical);
        let consumer = self
            .elements
            .top_down()
            .find(|el| {
                let mut el = el.borrow_mut();
                el.hit_test(logical) && el.on_left_down(logical)
            })
            .cloned();

        let consumed = consumer.is_some();
        self.drag_target = consumer;
        consumed
    }

    /// Routes pointer motion. With the button held the drag target receives
    /// the drag; otherwise hover enter/leave/move are tracked.
    pub fn on_mouse_move(&mut self, logical: Vec2, left_down: bool) -> bool {
        let rel = self
            .last_pointer
            .map_or(Vec2::zero(), |last| logical - last);
        self.last_pointer = Some(logical);

        if left_down {
            if let Some(target) = &self.drag_target {
                return target.borrow_mut().on_mouse_drag(logical, rel);
            }
        }

        let hit = self
            .elements
            .top_down()
            .find(|el| el.borrow().hit_test(logical))
            .cloned();

        let same = match (&self.hovered, &hit) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if !same {
            if let Some(old) = self.hovered.take() {
                old.borrow_mut().on_mouse_leave(logical);
            }
            if let Some(new) = &hit {
                new.borrow_mut().on_mouse_enter(logical);
            }
            self.hovered = hit.clone();
        }

        match hit {
            Some(el) => el.borrow_mut().on_mouse_move(logical),
            None => false,
        }
    }

    pub fn on_left_up(&mut self, logical: Vec2) -> bool {
        self.last_pointer = Some(logical);
        if let Some(target) = self.drag_target.take() {
            return target.borrow_mut().on_left_up(logical);
        }
        self.elements.top_down().any(|el| {
            let mut el = el.borrow_mut();
            el.hit_test(logical) && el.on_left_up(logical)
        })
    }

    /// Paints every element bottom-up. The first paint error stops the pass.
    pub fn paint(&self, surface: &mut dyn PaintSurface) -> Result<()> {
        for element in self.elements.bottom_up() {
            element.borrow().paint(surface)?;
        }
        Ok(())
    }

    /// Replaces the node selection.
    pub fn select_nodes(&mut self, indices: HashSet<usize>) -> bool {
        if *self.selected_nodes.item() != indices {
            self.abort_drag();
        }
        self.selected_nodes.replace(indices)
    }

    /// Adds a node to the selection.
    pub fn add_node_to_selection(&mut self, index: usize) -> bool {
        if self.selected_nodes.contains(&index) {
            return false;
        }
        self.abort_drag();
        self.selected_nodes.add(index)
    }

    /// Removes a node from the selection.
    ///
    /// Returns [`rkcanvas_core::CanvasError::NotFound`] if it is not selected.
    pub fn deselect_node(&mut self, index: usize) -> Result<()> {
        if self.selected_nodes.contains(&index) {
            self.abort_drag();
        }
        self.selected_nodes.remove(&index)
    }

    pub fn select_reactions(&mut self, indices: HashSet<usize>) -> bool {
        self.selected_reactions.replace(indices)
    }

    /// Attaches an extra observer to the node selection.
    pub fn observe_node_selection<F>(&mut self, observer: F) -> ObserverId
    where
        F: Fn(&HashSet<usize>) + 'static,
    {
        self.selected_nodes.attach(observer)
    }

    pub fn unobserve_node_selection(&mut self, id: ObserverId) -> Result<()> {
        self.selected_nodes.detach(id)
    }

    pub fn selected_nodes(&self) -> &HashSet<usize> {
        self.selected_nodes.item()
    }

    pub fn selected_reactions(&self) -> &HashSet<usize> {
        self.selected_reactions.item()
    }

    pub fn select_box(&self) -> &Shared<SelectBox> {
        &self.select_box
    }

    /// Node record with model index `index`.
    pub fn node(&self, index: usize) -> Option<Shared<Node>> {
        self.nodes
            .borrow()
            .iter()
            .find(|n| n.borrow().index == index)
            .cloned()
    }

    pub fn elements(&self) -> &LayeredElements {
        &self.elements
    }

    pub fn viewport(&self) -> &Rc<Viewport> {
        &self.viewport
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.select_box.borrow_mut().set_bounds(bounds);
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("elements", &self.elements)
            .field("selected_nodes", &self.selected_nodes)
            .field("selected_reactions", &self.selected_reactions)
            .finish_non_exhaustive()
    }
}

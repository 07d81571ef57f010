//! Node element

use crate::element::{CanvasElement, ElementBase};
use crate::model::Node;
use crate::paint::{draw_rect, Border, PaintSurface};
use rkcanvas_core::{padded_rect, within, Result, Shared, SharedIndexSet, Theme, Vec2};
use std::rc::Rc;

/// Draws one node and hit-tests its rectangle.
///
/// The node record is shared with the select box, which rewrites its
/// geometry during a gesture.
pub struct NodeElement {
    base: ElementBase,
    node: Shared<Node>,
    selected: SharedIndexSet,
    theme: Rc<Theme>,
}

impl NodeElement {
    pub fn new(
        base: ElementBase,
        node: Shared<Node>,
        selected: SharedIndexSet,
        theme: Rc<Theme>,
    ) -> Self {
        Self {
            base,
            node,
            selected,
            theme,
        }
    }

    pub fn node(&self) -> &Shared<Node> {
        &self.node
    }

    /// True when this node is part of a selection of two or more nodes.
    fn in_multi_selection(&self, index: usize) -> bool {
        let selected = self.selected.borrow();
        selected.len() > 1 && selected.contains(&index)
    }
}

impl CanvasElement for NodeElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn hit_test(&self, logical: Vec2) -> bool {
        within(logical, &self.node.borrow().rect())
    }

    fn paint(&self, surface: &mut dyn PaintSurface) -> Result<()> {
        let node = self.node.borrow();
        let scale = self.base.transform().scale();
        let rect = self.to_device_rect(&node.rect());

        let border = (node.border_width > 0.0)
            .then(|| Border::new(node.border_color, node.border_width * scale));
        draw_rect(surface, rect, Some(node.fill_color), border)?;

        let font_size = self.theme.node_font_size * scale;
        let extent = surface.text_extent(&node.id, font_size);
        let text_pos = rect.center() - extent / 2.0;
        surface.draw_text(&node.id, text_pos, font_size, self.theme.label_color);

        if self.in_multi_selection(node.index) {
            let outline = padded_rect(&rect, self.theme.select_outline_padding * scale);
            draw_rect(
                surface,
                outline,
                None,
                Some(Border::new(
                    self.theme.select_box_color,
                    self.theme.select_outline_width,
                )),
            )?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for NodeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeElement")
            .field("layer", &self.base.layer())
            .field("node", &self.node.borrow().id)
            .finish()
    }
}

//! Reaction element

use crate::element::{CanvasElement, ElementBase};
use crate::model::Reaction;
use crate::paint::PaintSurface;
use rkcanvas_core::{Rect, Result, SharedIndexSet, Theme, Vec2};
use std::rc::Rc;

/// Draws a reaction curve and its centroid dot.
pub struct ReactionElement {
    base: ElementBase,
    reaction: Reaction,
    selected: SharedIndexSet,
    theme: Rc<Theme>,
}

impl ReactionElement {
    pub fn new(
        base: ElementBase,
        reaction: Reaction,
        selected: SharedIndexSet,
        theme: Rc<Theme>,
    ) -> Self {
        Self {
            base,
            reaction,
            selected,
            theme,
        }
    }

    pub fn reaction(&self) -> &Reaction {
        &self.reaction
    }

    fn is_selected(&self) -> bool {
        self.selected.borrow().contains(&self.reaction.index)
    }
}

impl CanvasElement for ReactionElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn hit_test(&self, logical: Vec2) -> bool {
        self.reaction.curve.is_point_near(logical)
    }

    fn paint(&self, surface: &mut dyn PaintSurface) -> Result<()> {
        let selected = self.is_selected();
        let transform = self.base.transform();
        self.reaction
            .curve
            .paint(surface, self.reaction.fill_color, transform, selected)?;

        let radius = self.theme.reaction_radius * transform.scale();
        let center = transform.to_device(self.reaction.curve.centroid());
        let color = if selected {
            self.theme.select_box_color
        } else {
            self.reaction.fill_color
        };
        surface.fill_ellipse(
            Rect::new(center - Vec2::repeat(radius), Vec2::repeat(radius * 2.0)),
            color,
        );
        Ok(())
    }
}

impl std::fmt::Debug for ReactionElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionElement")
            .field("layer", &self.base.layer())
            .field("reaction", &self.reaction.id)
            .finish()
    }
}

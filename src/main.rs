//! Headless demo: scripts a move and a resize gesture against a recording
//! surface and logs what the controller receives.
//!
//! Usage: `rkcanvas [theme.json]`

use anyhow::Context;
use rkcanvas::{
    init_logging, Canvas, Color, DrawCommand, Node, PaintSurface, Reaction, ReactionCurve,
    RecordingController, RecordingSurface, Rect, Theme, Vec2, ViewTransform, Viewport,
};
use std::collections::HashSet;
use std::rc::Rc;

/// Straight reaction curve between two points.
#[derive(Debug)]
struct StraightCurve {
    from: Vec2,
    to: Vec2,
}

impl ReactionCurve for StraightCurve {
    fn is_point_near(&self, logical: Vec2) -> bool {
        let d = self.to - self.from;
        let len2 = d.x * d.x + d.y * d.y;
        if len2 == 0.0 {
            return false;
        }
        let p = logical - self.from;
        let t = ((p.x * d.x + p.y * d.y) / len2).clamp(0.0, 1.0);
        let off = p - d * t;
        off.x * off.x + off.y * off.y <= 9.0
    }

    fn centroid(&self) -> Vec2 {
        (self.from + self.to) / 2.0
    }

    fn paint(
        &self,
        surface: &mut dyn PaintSurface,
        color: Color,
        transform: &dyn ViewTransform,
        _selected: bool,
    ) -> rkcanvas::Result<()> {
        let points = [transform.to_device(self.from), transform.to_device(self.to)];
        surface.stroke_polyline(&points, color, transform.scale());
        Ok(())
    }
}

fn load_theme() -> anyhow::Result<Theme> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read theme file {path}"))?;
            let theme = Theme::from_json_str(&json)
                .with_context(|| format!("Invalid theme file {path}"))?;
            Ok(theme)
        }
        None => Ok(Theme::default()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let theme = Rc::new(load_theme()?);
    let controller = Rc::new(RecordingController::new());
    let mut canvas = Canvas::new(
        theme,
        Rc::new(Viewport::new()),
        controller.clone(),
        0,
        Rect::from_xywh(0.0, 0.0, 800.0, 600.0),
    );

    canvas.reset(
        vec![
            Node::new(0, "glucose", Vec2::new(50.0, 50.0), Vec2::new(80.0, 40.0)),
            Node::new(1, "g6p", Vec2::new(250.0, 50.0), Vec2::new(80.0, 40.0)),
            Node::new(2, "atp", Vec2::new(150.0, 180.0), Vec2::new(60.0, 30.0)),
        ],
        vec![Reaction::new(
            0,
            "hexokinase",
            Box::new(StraightCurve {
                from: Vec2::new(130.0, 70.0),
                to: Vec2::new(250.0, 70.0),
            }),
        )],
    );
    canvas.select_nodes(HashSet::from([0, 1]));

    // move the pair right and down
    let grip = canvas.select_box().borrow().bounding_rect().center();
    canvas.on_left_down(grip);
    for step in 1..=4 {
        canvas.on_mouse_move(grip + Vec2::new(25.0, 10.0) * f64::from(step), true);
    }
    canvas.on_left_up(grip + Vec2::new(100.0, 40.0));

    // shrink from the bottom-right corner
    let corner = canvas.select_box().borrow().bounding_rect().end();
    canvas.on_left_down(corner);
    canvas.on_mouse_move(corner - Vec2::new(120.0, 10.0), true);
    canvas.on_left_up(corner - Vec2::new(120.0, 10.0));

    for call in controller.take_calls() {
        tracing::info!("Controller: {:?}", call);
    }

    let mut surface = RecordingSurface::new();
    canvas.paint(&mut surface)?;
    let texts = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { .. }))
        .count();
    tracing::info!(
        "Painted {} primitives ({} labels)",
        surface.commands().len(),
        texts
    );

    Ok(())
}

use crate::common::{node, HookRecorder, SegmentCurve};
use rkcanvas_core::{shared, Rect, Theme, Vec2};
use rkcanvas_elements::{
    Canvas, ControllerCall, DrawCommand, ElementRef, Reaction, RecordingController,
    RecordingSurface, SelectMode, Viewport, NODE_LAYER, REACTION_LAYER, SELECT_BOX_LAYER,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn setup() -> (Canvas, Rc<RecordingController>) {
    let controller = Rc::new(RecordingController::new());
    let mut canvas = Canvas::new(
        Rc::new(Theme::default()),
        Rc::new(Viewport::new()),
        controller.clone(),
        7,
        Rect::from_xywh(0.0, 0.0, 500.0, 500.0),
    );
    let reaction = Reaction::new(
        0,
        "r0",
        Box::new(SegmentCurve::new(Vec2::new(40.0, 25.0), Vec2::new(100.0, 25.0))),
    );
    canvas.reset(
        vec![
            node(0, 10.0, 10.0, 40.0, 30.0),
            node(1, 100.0, 10.0, 40.0, 30.0),
        ],
        vec![reaction],
    );
    (canvas, controller)
}

#[test]
fn test_layers_after_reset() {
    let (canvas, _) = setup();
    let layers: Vec<i32> = canvas
        .elements()
        .bottom_up()
        .map(|e| e.borrow().layer())
        .collect();
    assert_eq!(
        layers,
        vec![REACTION_LAYER, NODE_LAYER, NODE_LAYER, SELECT_BOX_LAYER]
    );
}

#[test]
fn test_press_without_selection_is_not_consumed() {
    let (mut canvas, controller) = setup();
    assert!(!canvas.on_left_down(Vec2::new(20.0, 20.0)));
    canvas.on_mouse_move(Vec2::new(60.0, 20.0), true);
    assert!(!canvas.on_left_up(Vec2::new(60.0, 20.0)));
    assert!(controller.calls().is_empty());
}

#[test]
fn test_drag_selected_node_through_canvas() {
    let (mut canvas, controller) = setup();
    canvas.select_nodes(HashSet::from([0]));

    assert!(canvas.on_left_down(Vec2::new(20.0, 20.0)));
    assert_eq!(canvas.select_box().borrow().mode(), SelectMode::Moving);
    assert!(canvas.on_mouse_move(Vec2::new(30.0, 60.0), true));
    assert!(canvas.on_left_up(Vec2::new(30.0, 60.0)));

    let moved = canvas.node(0).unwrap();
    assert_eq!(moved.borrow().position, Vec2::new(20.0, 50.0));
    assert_eq!(
        controller.take_calls(),
        vec![
            ControllerCall::StartGroup,
            ControllerCall::MoveNode {
                net_index: 7,
                node_index: 0,
                position: Vec2::new(20.0, 50.0)
            },
            ControllerCall::EndGroup,
        ]
    );
}

#[test]
fn test_paint_bottom_up_with_selection_outline() {
    let (mut canvas, _) = setup();
    canvas.select_nodes(HashSet::from([0, 1]));
    canvas.select_reactions(HashSet::from([0]));

    let mut surface = RecordingSurface::new();
    canvas.paint(&mut surface).unwrap();
    let cmds = surface.commands();

    // reaction curve first, select box handles last
    assert!(matches!(cmds[0], DrawCommand::Polyline { .. }));
    assert!(matches!(cmds.last(), Some(DrawCommand::FillRect { .. })));

    let theme = Theme::default();
    let outlines = cmds
        .iter()
        .filter(|c| {
            matches!(c, DrawCommand::StrokeRect { color, .. } if *color == theme.select_box_color)
        })
        .count();
    // one per selected node plus the select box itself
    assert_eq!(outlines, 3);
    assert!(cmds.iter().any(|c| matches!(
        c,
        DrawCommand::FillEllipse { color, .. } if *color == theme.select_box_color
    )));
}

#[test]
fn test_hover_enter_leave_and_propagation() {
    let (mut canvas, _) = setup();
    let log = Rc::new(RefCell::new(Vec::new()));
    let area = Rect::from_xywh(300.0, 300.0, 50.0, 50.0);
    let top: ElementRef = shared(HookRecorder::new(20, area, false, "top", log.clone()));
    let under: ElementRef = shared(HookRecorder::new(15, area, true, "under", log.clone()));
    canvas.add_overlay(top);
    canvas.add_overlay(under);

    canvas.on_mouse_move(Vec2::new(310.0, 310.0), false);
    canvas.on_mouse_move(Vec2::new(320.0, 310.0), false);
    canvas.on_mouse_move(Vec2::new(400.0, 400.0), false);
    assert_eq!(
        *log.borrow(),
        vec!["top:enter", "top:move", "top:move", "top:leave"]
    );

    // the top recorder declines the press, so it falls through
    log.borrow_mut().clear();
    assert!(canvas.on_left_down(Vec2::new(310.0, 310.0)));
    canvas.on_mouse_move(Vec2::new(315.0, 310.0), true);
    assert!(canvas.on_left_up(Vec2::new(315.0, 310.0)));
    assert_eq!(
        *log.borrow(),
        vec!["top:down", "under:down", "under:drag", "under:up"]
    );
}

#[test]
fn test_overlays_survive_reset() {
    let (mut canvas, _) = setup();
    let log = Rc::new(RefCell::new(Vec::new()));
    let recorder: ElementRef = shared(HookRecorder::new(
        20,
        Rect::from_xywh(0.0, 0.0, 1.0, 1.0),
        true,
        "p",
        log,
    ));
    canvas.add_overlay(recorder);
    canvas.reset(vec![node(0, 10.0, 10.0, 40.0, 30.0)], Vec::new());
    assert_eq!(canvas.elements().len(), 3);
}

#[test]
fn test_selection_observer_and_errors() {
    let (mut canvas, _) = setup();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let id = canvas.observe_node_selection(move |sel: &HashSet<usize>| s.borrow_mut().push(sel.len()));

    canvas.add_node_to_selection(0);
    canvas.add_node_to_selection(1);
    assert!(!canvas.select_nodes(HashSet::from([0, 1])));
    assert!(canvas.deselect_node(9).unwrap_err().is_not_found());
    assert_eq!(*seen.borrow(), vec![1, 2]);

    canvas.unobserve_node_selection(id).unwrap();
    assert!(canvas.unobserve_node_selection(id).is_err());
}

use crate::common::{node, Fixture};
use rkcanvas_core::{Rect, Theme, Vec2};
use rkcanvas_elements::{CanvasElement, ControllerCall, HitPart, SelectMode};

fn open_bounds() -> Rect {
    Rect::from_xywh(-1000.0, -1000.0, 3000.0, 3000.0)
}

#[test]
fn test_single_node_uses_outline_padding() {
    let fx = Fixture::new(vec![node(0, 0.0, 0.0, 50.0, 50.0)], open_bounds());
    let pad = Theme::default().select_outline_padding;

    assert_eq!(fx.select_box.padding(), pad);
    assert_eq!(
        fx.select_box.bounding_rect(),
        Rect::from_xywh(-pad, -pad, 50.0 + 2.0 * pad, 50.0 + 2.0 * pad)
    );
}

#[test]
fn test_group_uses_group_padding() {
    let fx = Fixture::new(
        vec![node(0, 0.0, 0.0, 40.0, 40.0), node(1, 60.0, 0.0, 40.0, 40.0)],
        open_bounds(),
    );
    assert_eq!(fx.select_box.padding(), 5.0);
    assert_eq!(
        fx.select_box.bounding_rect(),
        Rect::from_xywh(-5.0, -5.0, 110.0, 50.0)
    );
}

#[test]
fn test_shrink_past_floor_clamps_to_min_ratio() {
    let mut fx = Fixture::new(
        vec![node(0, 0.0, 0.0, 40.0, 40.0), node(1, 60.0, 0.0, 40.0, 40.0)],
        open_bounds(),
    );
    let fixed = fx.select_box.bounding_rect().end();

    fx.grab_handle(0);
    assert_eq!(fx.select_box.mode(), SelectMode::Resizing);

    // collapse the top-left corner onto the fixed bottom-right corner,
    // then overshoot past it
    fx.drag_to(Vec2::new(50.0, 20.0));
    fx.drag_to(fixed);
    fx.drag_to(Vec2::new(200.0, 200.0));

    // min ratio is (20 / 40, 15 / 40); content was 100 x 40
    let rect = fx.select_box.bounding_rect();
    assert_eq!(rect.size, Vec2::new(50.0 + 10.0, 15.0 + 10.0));
    assert_eq!(rect.end(), fixed);

    assert_eq!(fx.sizes(), vec![Vec2::new(20.0, 15.0); 2]);
    assert_eq!(
        fx.positions(),
        vec![Vec2::new(50.0, 25.0), Vec2::new(80.0, 25.0)]
    );
}

#[test]
fn test_edge_handle_keeps_parallel_axis() {
    let mut fx = Fixture::new(
        vec![
            node(0, 0.1, 0.7, 40.3, 33.3),
            node(1, 61.7, 12.9, 20.1, 25.3),
        ],
        open_bounds(),
    );
    let before_pos = fx.positions();
    let before_size = fx.sizes();

    // right edge midpoint: only x may change
    let grip = fx.grab_handle(3);
    fx.drag_to(grip + Vec2::new(37.3, 11.1));
    fx.drag_to(grip + Vec2::new(-12.9, -40.0));

    for (i, n) in fx.nodes.iter().enumerate() {
        let n = n.borrow();
        assert_eq!(n.position.y, before_pos[i].y);
        assert_eq!(n.size.y, before_size[i].y);
    }
    assert_ne!(fx.sizes()[0].x, before_size[0].x);
    assert!(fx.select_box.on_left_up(grip));

    // top edge midpoint: only y may change
    let before_pos = fx.positions();
    let before_size = fx.sizes();
    let grip = fx.grab_handle(1);
    fx.drag_to(grip + Vec2::new(55.5, -7.7));

    for (i, n) in fx.nodes.iter().enumerate() {
        let n = n.borrow();
        assert_eq!(n.position.x, before_pos[i].x);
        assert_eq!(n.size.x, before_size[i].x);
    }
    assert_ne!(fx.sizes()[0].y, before_size[0].y);
}

#[test]
fn test_undersized_node_grows_inside_bounds() {
    let bounds = Rect::from_xywh(0.0, 0.0, 200.0, 200.0);
    let mut fx = Fixture::new(vec![node(0, 5.0, 5.0, 10.0, 10.0)], bounds);
    assert_eq!(
        fx.select_box.bounding_rect(),
        Rect::from_xywh(2.0, 2.0, 16.0, 16.0)
    );

    // any shrink hits the floor, which grows the node to the theme minimum
    fx.grab_handle(0);
    fx.drag_to(Vec2::new(10.0, 10.0));
    assert_eq!(fx.sizes(), vec![Vec2::new(20.0, 15.0)]);
    assert_eq!(fx.positions(), vec![Vec2::new(0.0, 0.0)]);
    assert_eq!(
        fx.select_box.bounding_rect(),
        Rect::from_xywh(-3.0, -3.0, 26.0, 21.0)
    );

    fx.drag_to(Vec2::new(12.0, 12.0));
    assert_eq!(fx.positions(), vec![Vec2::new(0.0, 0.0)]);
    assert!(fx.select_box.on_left_up(Vec2::new(12.0, 12.0)));
    let pos = fx.positions()[0];
    assert!(pos.x >= bounds.position.x && pos.y >= bounds.position.y);
}

#[test]
fn test_move_past_right_bound_shifts_group_rigidly() {
    let mut fx = Fixture::new(
        vec![
            node(0, 100.0, 50.0, 30.0, 30.0),
            node(1, 150.0, 60.0, 20.0, 20.0),
        ],
        Rect::from_xywh(0.0, 0.0, 200.0, 200.0),
    );
    let grip = Vec2::new(120.0, 65.0);
    assert_eq!(fx.select_box.classify(grip), HitPart::Body);
    assert!(fx.select_box.on_left_down(grip));

    // tentative union right edge lands at 210, 10 past the bound
    let delta = Vec2::new(40.0, 0.0);
    let before = fx.positions();
    fx.drag_to(grip + delta);

    for (pos, orig) in fx.positions().iter().zip(&before) {
        let tentative = *orig + delta;
        assert_eq!(pos.x, tentative.x - 10.0);
        assert_eq!(pos.y, orig.y);
    }
    assert_eq!(
        fx.select_box.bounding_rect().position,
        Vec2::new(125.0, 45.0)
    );
}

#[test]
fn test_move_commit_is_grouped() {
    let mut fx = Fixture::new(
        vec![node(3, 0.0, 0.0, 30.0, 30.0), node(8, 50.0, 0.0, 30.0, 30.0)],
        open_bounds(),
    );
    let grip = Vec2::new(15.0, 15.0);
    assert!(fx.select_box.on_left_down(grip));
    fx.drag_to(grip + Vec2::new(10.0, 20.0));
    assert!(fx.select_box.on_left_up(grip + Vec2::new(10.0, 20.0)));

    assert_eq!(
        fx.controller.take_calls(),
        vec![
            ControllerCall::StartGroup,
            ControllerCall::MoveNode {
                net_index: 0,
                node_index: 3,
                position: Vec2::new(10.0, 20.0)
            },
            ControllerCall::MoveNode {
                net_index: 0,
                node_index: 8,
                position: Vec2::new(60.0, 20.0)
            },
            ControllerCall::EndGroup,
        ]
    );
    assert_eq!(fx.select_box.mode(), SelectMode::Idle);
}

#[test]
fn test_resize_commit_sends_position_then_size() {
    let mut fx = Fixture::new(vec![node(2, 0.0, 0.0, 50.0, 50.0)], open_bounds());
    let grip = fx.grab_handle(4);
    fx.drag_to(grip + Vec2::new(50.0, 25.0));
    assert!(fx.select_box.on_left_up(grip));

    let calls = fx.controller.take_calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], ControllerCall::StartGroup);
    assert_eq!(
        calls[1],
        ControllerCall::MoveNode {
            net_index: 0,
            node_index: 2,
            position: Vec2::zero()
        }
    );
    assert_eq!(
        calls[2],
        ControllerCall::SetNodeSize {
            net_index: 0,
            node_index: 2,
            size: Vec2::new(100.0, 75.0)
        }
    );
    assert_eq!(calls[3], ControllerCall::EndGroup);
}

#[test]
fn test_release_while_idle_is_not_consumed() {
    let mut fx = Fixture::new(vec![node(0, 0.0, 0.0, 50.0, 50.0)], open_bounds());
    assert!(!fx.select_box.on_left_up(Vec2::zero()));
    assert!(fx.controller.calls().is_empty());
}

#[test]
fn test_button_down_outside_is_not_consumed() {
    let mut fx = Fixture::new(vec![node(0, 0.0, 0.0, 50.0, 50.0)], open_bounds());
    assert!(!fx.select_box.on_left_down(Vec2::new(300.0, 300.0)));
    assert_eq!(fx.select_box.mode(), SelectMode::Idle);
}

#[test]
fn test_selection_change_drops_gesture() {
    let mut fx = Fixture::new(vec![node(0, 0.0, 0.0, 50.0, 50.0)], open_bounds());
    fx.grab_handle(4);
    let nodes = fx.nodes.clone();
    fx.select_box.update_nodes(nodes);
    assert_eq!(fx.select_box.mode(), SelectMode::Idle);
    assert!(!fx.select_box.on_left_up(Vec2::zero()));
}

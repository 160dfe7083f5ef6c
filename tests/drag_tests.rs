// Host-side tests for drag physics, click detection and stacking.

use folio_core::{
    frame_alpha, is_click, DragConfig, DragController, DragPhase, DragState, Rect,
    REFERENCE_FRAME_SEC,
};
use glam::Vec2;

const DT: f32 = REFERENCE_FRAME_SEC;

fn controller(n: usize) -> DragController {
    let positions: Vec<Vec2> = (0..n).map(|i| Vec2::new(100.0 * i as f32, 50.0)).collect();
    DragController::new(&positions, DragConfig::default())
}

#[test]
fn click_threshold_is_strict() {
    let press = Vec2::new(100.0, 100.0);
    assert!(is_click(press, Vec2::new(103.0, 103.0), 5.0));
    assert!(!is_click(press, Vec2::new(103.0, 104.0), 5.0)); // exactly 5px
    assert!(!is_click(press, Vec2::new(110.0, 100.0), 5.0));
}

#[test]
fn release_near_press_is_a_click() {
    let mut c = controller(2);
    c.pointer_down(0, Vec2::new(0.0, 50.0), Vec2::new(20.0, 70.0));
    c.pointer_move(Vec2::new(22.0, 71.0));
    let r = c.pointer_up(Vec2::new(23.0, 73.0)).expect("card was grabbed");
    assert_eq!(r.index, 0);
    assert!(r.is_click);
}

#[test]
fn release_far_from_press_is_a_drag() {
    let mut c = controller(2);
    c.pointer_down(1, Vec2::new(100.0, 50.0), Vec2::new(120.0, 70.0));
    c.pointer_move(Vec2::new(300.0, 200.0));
    let r = c.pointer_up(Vec2::new(300.0, 200.0)).expect("card was grabbed");
    assert_eq!(r.index, 1);
    assert!(!r.is_click);
}

#[test]
fn pointer_up_without_grab_is_ignored() {
    let mut c = controller(1);
    assert!(c.pointer_up(Vec2::ZERO).is_none());
    assert!(c.pointer_down(5, Vec2::ZERO, Vec2::ZERO).is_none());
}

#[test]
fn drag_start_raises_z_monotonically() {
    let mut c = controller(3);
    let mut last = c.config().z_start;
    for i in [0, 1, 2, 0, 2] {
        let z = c
            .pointer_down(i, Vec2::ZERO, Vec2::ZERO)
            .expect("index in range");
        assert!(z > last);
        last = z;
        c.pointer_up(Vec2::ZERO);
    }
}

#[test]
fn release_over_ui_panel_drops_behind_it() {
    let mut c = controller(2);
    let hero = Rect::new(0.0, 0.0, 400.0, 300.0);
    let index = Rect::new(1000.0, 0.0, 300.0, 600.0);

    let raised = c.pointer_down(0, Vec2::ZERO, Vec2::ZERO).unwrap();
    c.pointer_up(Vec2::ZERO);
    let over = Rect::new(350.0, 250.0, 200.0, 200.0);
    assert_eq!(c.resolve_release_z(0, &over, &[hero, index]), c.config().z_behind_ui);
    assert_eq!(c.card(0).unwrap().z_index(), c.config().z_behind_ui);

    let raised2 = c.pointer_down(1, Vec2::ZERO, Vec2::ZERO).unwrap();
    assert!(raised2 > raised);
    c.pointer_up(Vec2::ZERO);
    let clear = Rect::new(500.0, 400.0, 200.0, 200.0);
    assert_eq!(c.resolve_release_z(1, &clear, &[hero, index]), raised2);

    // Missing panels never force the card down.
    assert_eq!(c.resolve_release_z(1, &over, &[]), raised2);
}

#[test]
fn dragging_lags_behind_target_then_settles_on_it() {
    let cfg = DragConfig::default();
    let mut c = controller(1);
    c.pointer_down(0, Vec2::new(0.0, 50.0), Vec2::new(10.0, 60.0));
    c.pointer_move(Vec2::new(210.0, 160.0));
    let target = Vec2::new(200.0, 150.0);
    assert_eq!(c.card(0).unwrap().target(), target);

    let first = c.tick(DT);
    assert_eq!(first.len(), 1);
    let (_, m) = first[0];
    assert!((m.position.x - 20.0).abs() < 1e-3);
    assert!((m.position.y - 60.0).abs() < 1e-3);
    assert_eq!(m.scale, cfg.drag_scale);
    assert!(m.rotation_deg > 0.0 && m.rotation_deg <= cfg.max_rotation_deg);

    for _ in 0..30 {
        c.tick(DT);
    }
    assert_eq!(c.card(0).unwrap().phase(), DragPhase::Dragging);
    c.pointer_up(Vec2::new(210.0, 160.0));
    assert_eq!(c.card(0).unwrap().phase(), DragPhase::Settling);

    let mut frames = 0;
    while c.has_active() {
        c.tick(DT);
        frames += 1;
        assert!(frames <= cfg.max_settle_frames);
    }
    let card = c.card(0).unwrap();
    assert_eq!(card.phase(), DragPhase::Idle);
    assert_eq!(card.position(), target);
    assert!(c.tick(DT).is_empty());
}

#[test]
fn settled_card_returns_to_neutral_transform() {
    let cfg = DragConfig::default();
    let mut s = DragState::new(Vec2::ZERO);
    s.begin(Vec2::ZERO, Vec2::ZERO, 101, &cfg);
    s.pointer_moved(Vec2::new(40.0, 0.0));
    s.tick(DT, &cfg);
    s.release(Vec2::new(40.0, 0.0), &cfg);
    let mut last = None;
    while s.is_active() {
        last = s.tick(DT, &cfg);
    }
    let m = last.expect("settling emits frames");
    assert_eq!(m.rotation_deg, 0.0);
    assert_eq!(m.scale, 1.0);
    assert_eq!(m.position, Vec2::new(40.0, 0.0));
}

#[test]
fn settle_frame_cap_snaps_to_target() {
    let cfg = DragConfig {
        max_settle_frames: 3,
        ..DragConfig::default()
    };
    let mut s = DragState::new(Vec2::ZERO);
    s.begin(Vec2::ZERO, Vec2::ZERO, 101, &cfg);
    s.pointer_moved(Vec2::new(1000.0, 1000.0));
    s.release(Vec2::new(1000.0, 1000.0), &cfg);
    for _ in 0..3 {
        assert!(s.tick(DT, &cfg).is_some());
    }
    assert_eq!(s.phase(), DragPhase::Idle);
    assert_eq!(s.position(), Vec2::new(1000.0, 1000.0));
    assert!(s.tick(DT, &cfg).is_none());
}

#[test]
fn sway_rotation_is_clamped_both_ways() {
    let cfg = DragConfig::default();
    let mut s = DragState::new(Vec2::new(2000.0, 0.0));
    s.begin(Vec2::new(2000.0, 0.0), Vec2::new(2000.0, 0.0), 101, &cfg);
    s.pointer_moved(Vec2::new(4000.0, 0.0));
    let m = s.tick(DT, &cfg).unwrap();
    assert_eq!(m.rotation_deg, cfg.max_rotation_deg);

    s.pointer_moved(Vec2::new(0.0, 0.0));
    let m = s.tick(DT, &cfg).unwrap();
    assert_eq!(m.rotation_deg, -cfg.max_rotation_deg);
}

#[test]
fn target_is_clamped_to_origin() {
    let cfg = DragConfig::default();
    let mut s = DragState::new(Vec2::new(10.0, 10.0));
    s.begin(Vec2::new(10.0, 10.0), Vec2::new(30.0, 30.0), 101, &cfg);
    s.pointer_moved(Vec2::new(-50.0, 5.0));
    assert_eq!(s.target(), Vec2::ZERO);
}

#[test]
fn regrab_while_settling_continues_from_current_position() {
    let cfg = DragConfig::default();
    let mut s = DragState::new(Vec2::ZERO);
    s.begin(Vec2::ZERO, Vec2::ZERO, 101, &cfg);
    s.pointer_moved(Vec2::new(300.0, 0.0));
    s.tick(DT, &cfg);
    s.release(Vec2::new(300.0, 0.0), &cfg);
    s.tick(DT, &cfg);
    let mid = s.position();
    assert_eq!(s.phase(), DragPhase::Settling);

    s.begin(Vec2::new(999.0, 999.0), mid, 102, &cfg);
    assert_eq!(s.phase(), DragPhase::Dragging);
    assert_eq!(s.position(), mid);
    assert_eq!(s.z_index(), 102);
}

#[test]
fn cancel_marks_inactive() {
    let mut c = controller(2);
    c.pointer_down(1, Vec2::ZERO, Vec2::ZERO);
    c.pointer_move(Vec2::new(50.0, 50.0));
    c.cancel(1);
    assert!(!c.has_active());
    assert!(c.grabbed().is_none());
    assert!(c.tick(DT).is_empty());
}

#[test]
fn browser_cancelled_pointer_ends_the_drag() {
    let mut c = controller(2);
    c.pointer_down(0, Vec2::new(0.0, 50.0), Vec2::new(10.0, 60.0));
    c.pointer_move(Vec2::new(300.0, 400.0));
    c.tick(DT);
    let held_at = c.card(0).unwrap().position();

    assert_eq!(c.pointer_cancel(), Some(0));
    assert!(c.grabbed().is_none());
    assert!(!c.has_active());
    assert!(c.tick(DT).is_empty());
    assert_eq!(c.card(0).unwrap().phase(), DragPhase::Idle);
    assert_eq!(c.card(0).unwrap().position(), held_at);

    // A stray cancel with nothing held is a no-op, and no release follows.
    assert_eq!(c.pointer_cancel(), None);
    assert!(c.pointer_up(Vec2::new(300.0, 400.0)).is_none());
}

#[test]
fn frame_alpha_matches_lerp_at_reference_rate() {
    assert!((frame_alpha(0.1, DT) - 0.1).abs() < 1e-5);
    assert!((frame_alpha(0.1, 2.0 * DT) - 0.19).abs() < 1e-5);
    assert_eq!(frame_alpha(0.1, 0.0), 0.0);
    assert!(frame_alpha(0.15, 10.0) <= 1.0);
}

#[test]
fn only_held_or_settling_cards_report_active() {
    let mut c = controller(3);
    assert!(!c.is_active(0));
    c.pointer_down(1, Vec2::new(100.0, 50.0), Vec2::new(100.0, 50.0));
    assert!(c.is_active(1));
    assert!(!c.is_active(0) && !c.is_active(2));

    c.pointer_move(Vec2::new(400.0, 300.0));
    c.pointer_up(Vec2::new(400.0, 300.0));
    assert!(c.is_active(1), "settling card still belongs to the animator");
    assert!(!c.is_active(7));
}

#[test]
fn layout_pass_only_moves_idle_cards() {
    let mut c = controller(2);
    c.pointer_down(0, Vec2::new(0.0, 50.0), Vec2::new(0.0, 50.0));
    c.reset_positions(&[Vec2::new(500.0, 500.0), Vec2::new(600.0, 600.0)]);
    assert_eq!(c.card(0).unwrap().position(), Vec2::new(0.0, 50.0));
    assert_eq!(c.card(1).unwrap().position(), Vec2::new(600.0, 600.0));
}

use super::*;
use crate::robot_assertions::{assert_offset_in_range, assert_settled_in};
use juka_drawer::{DrawerConfig, FloatingOverlay};

fn robot(state: DrawerState) -> DrawerRobot {
    DrawerRobot::new(DrawerController::new(DrawerConfig::default(), state))
}

#[test]
fn drag_script_shape() {
    let script = drag_script(310.0, 290.0, 100, 60, 6);
    assert_eq!(script.len(), 7);
    assert!(!script.spilled());
    assert_eq!(script[0].kind, PointerEventKind::Down);
    assert_eq!(script[6].kind, PointerEventKind::Up);
    assert_eq!(script[6].position.y, 290.0);
    assert_eq!(script[6].time_ms, 160);
    assert!(script.windows(2).all(|w| w[0].time_ms < w[1].time_ms));
}

#[test]
fn fling_up_expands_fully() {
    let mut robot = robot(DrawerState::HalfExpanded);
    let change = robot.fling(310.0, 290.0);
    assert_eq!(change.map(|c| c.to), Some(DrawerState::FullyExpanded));
    robot.wait_for_idle();
    assert_settled_in(robot.drawer(), DrawerState::FullyExpanded, "after fling");
    assert_eq!(robot.drawer().offset(), 0.0);
}

#[test]
fn slow_short_drag_snaps_back() {
    let mut robot = robot(DrawerState::HalfExpanded);
    assert_eq!(robot.drag(310.0, 340.0, 1_000, 10), None);
    robot.wait_for_idle();
    assert_settled_in(robot.drawer(), DrawerState::HalfExpanded, "snap back");
}

#[test]
fn long_drag_down_collapses() {
    let mut robot = robot(DrawerState::HalfExpanded);
    robot.drag(310.0, 400.0, 300, 10);
    let offset = robot.wait_for_idle();
    assert_eq!(offset, 450.0);
    assert_settled_in(robot.drawer(), DrawerState::Collapsed, "collapsed");
}

#[test]
fn taps_on_handle_cycle_states() {
    let mut robot = robot(DrawerState::Collapsed);

    assert!(robot.tap(460.0));
    robot.wait_for_idle();
    assert_settled_in(robot.drawer(), DrawerState::HalfExpanded, "first tap");

    assert!(robot.tap(310.0));
    robot.wait_for_idle();
    assert_settled_in(robot.drawer(), DrawerState::FullyExpanded, "second tap");

    assert!(robot.tap(10.0));
    robot.wait_for_idle();
    assert_settled_in(robot.drawer(), DrawerState::HalfExpanded, "third tap");
}

#[test]
fn tap_on_content_is_not_consumed() {
    let mut robot = robot(DrawerState::HalfExpanded);
    assert!(!robot.tap(500.0));
    assert_eq!(robot.drawer().state(), DrawerState::HalfExpanded);
}

#[test]
fn cancelled_drag_resolves_like_release() {
    let mut robot = robot(DrawerState::HalfExpanded);
    let change = robot.drag_and_cancel(310.0, 380.0, 5);
    assert_eq!(change.map(|c| c.to), Some(DrawerState::Collapsed));
    robot.wait_for_idle();
    assert_settled_in(robot.drawer(), DrawerState::Collapsed, "cancelled");
}

#[test]
fn offset_stays_in_range_while_settling() {
    let mut robot = robot(DrawerState::Collapsed);
    robot.fling(460.0, 440.0);
    for _ in 0..120 {
        robot.advance_frame();
        assert_offset_in_range(robot.drawer(), "settling");
    }
    assert_settled_in(robot.drawer(), DrawerState::HalfExpanded, "after fling");
}

#[test]
fn floating_control_follows_resting_state() {
    let overlay = FloatingOverlay::new();
    let mut robot = robot(DrawerState::HalfExpanded);
    assert!(overlay.placement(robot.drawer()).visible);

    robot.fling(310.0, 290.0);
    assert!(!overlay.placement(robot.drawer()).visible);
    robot.wait_for_idle();

    robot.fling(10.0, 30.0);
    robot.wait_for_idle();
    let placement = overlay.placement(robot.drawer());
    assert!(placement.visible);
    assert_eq!(placement.bottom_padding, 320.0);
}

#[test]
fn advance_time_moves_the_clock() {
    let mut robot = robot(DrawerState::HalfExpanded);
    robot.advance_time(100);
    assert!(robot.time_ms() >= 100);
    assert_eq!(robot.into_inner().offset(), 300.0);
}

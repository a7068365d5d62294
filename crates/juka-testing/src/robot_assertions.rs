//! Assertion helpers for drawer robot tests.

use juka_drawer::{DrawerController, DrawerState};

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the rendered offset lies within the drawer's travel.
pub fn assert_offset_in_range(drawer: &DrawerController, msg: &str) {
    let offset = drawer.offset();
    let collapsed = drawer.config().collapsed_offset();
    assert!(
        (0.0..=collapsed).contains(&offset),
        "{}: offset {} outside [0, {}]",
        msg,
        offset,
        collapsed
    );
}

/// Assert that the drawer is at rest in `state`, at that state's offset.
pub fn assert_settled_in(drawer: &DrawerController, state: DrawerState, msg: &str) {
    assert_eq!(drawer.state(), state, "{}: state", msg);
    assert!(!drawer.is_dragging(), "{}: still dragging", msg);
    assert!(!drawer.is_animating(), "{}: still animating", msg);
    assert_approx_eq(drawer.offset(), drawer.resting_offset(), 0.01, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_within_tolerance() {
        assert_approx_eq(10.0, 10.05, 0.1, "close enough");
    }

    #[test]
    #[should_panic(expected = "too far")]
    fn approx_eq_outside_tolerance_panics() {
        assert_approx_eq(10.0, 11.0, 0.1, "too far");
    }
}

//! Tap recogniser.
//!
//! A press is a tap when the pointer is released without ever having moved
//! further than the touch slop from where it went down.

use crate::gesture_constants::TOUCH_SLOP;
use crate::nodes::input::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapDetector {
    slop: f32,
    press: Option<Point>,
    slop_exceeded: bool,
}

impl Default for TapDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl TapDetector {
    pub fn new() -> Self {
        Self::with_slop(TOUCH_SLOP)
    }

    pub fn with_slop(slop: f32) -> Self {
        Self {
            slop,
            press: None,
            slop_exceeded: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Whether the current press has already turned into a drag.
    pub fn slop_exceeded(&self) -> bool {
        self.slop_exceeded
    }

    pub fn on_press(&mut self, position: Point) {
        self.press = Some(position);
        self.slop_exceeded = false;
    }

    /// Returns `true` exactly once: on the move that first leaves the slop.
    pub fn on_move(&mut self, position: Point) -> bool {
        let Some(press) = self.press else {
            return false;
        };
        if self.slop_exceeded || press.distance_to(position) <= self.slop {
            return false;
        }
        self.slop_exceeded = true;
        true
    }

    /// Returns whether the press that just ended was a tap.
    pub fn on_release(&mut self, position: Point) -> bool {
        self.on_move(position);
        let was_tap = self.press.is_some() && !self.slop_exceeded;
        self.reset();
        was_tap
    }

    pub fn reset(&mut self) {
        self.press = None;
        self.slop_exceeded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_inside_slop_is_tap() {
        let mut tap = TapDetector::new();
        tap.on_press(Point::new(10.0, 10.0));
        assert!(!tap.on_move(Point::new(13.0, 14.0)));
        assert!(tap.on_release(Point::new(12.0, 12.0)));
        assert!(!tap.is_pressed());
    }

    #[test]
    fn leaving_slop_reports_once_and_cancels_tap() {
        let mut tap = TapDetector::new();
        tap.on_press(Point::ZERO);
        assert!(tap.on_move(Point::new(0.0, TOUCH_SLOP + 1.0)));
        assert!(!tap.on_move(Point::new(0.0, 40.0)));
        // Coming back does not turn the drag into a tap again.
        assert!(!tap.on_release(Point::ZERO));
    }

    #[test]
    fn release_far_away_without_moves_is_not_tap() {
        let mut tap = TapDetector::new();
        tap.on_press(Point::ZERO);
        assert!(!tap.on_release(Point::new(0.0, 100.0)));
    }

    #[test]
    fn release_without_press_is_not_tap() {
        let mut tap = TapDetector::new();
        assert!(!tap.on_release(Point::ZERO));
    }
}

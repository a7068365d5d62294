//! Robot-style driver for drawer tests
//!
//! The robot owns a [`DrawerController`] and a virtual clock. It turns
//! high-level interactions (drags, flings, taps) into timestamped pointer
//! streams and pumps animation frames until the drawer is idle.
//!
//! # Example
//!
//! ```
//! use juka_drawer::{DrawerConfig, DrawerController, DrawerState};
//! use juka_testing::DrawerRobot;
//!
//! let drawer = DrawerController::new(DrawerConfig::default(), DrawerState::HalfExpanded);
//! let mut robot = DrawerRobot::new(drawer);
//!
//! // Flick the handle upwards.
//! robot.fling(310.0, 290.0);
//! robot.wait_for_idle();
//!
//! assert_eq!(robot.drawer().state(), DrawerState::FullyExpanded);
//! ```

use juka_drawer::{DrawerController, DrawerState, StateChange};
use juka_foundation::{Point, PointerEvent, PointerEventKind};
use smallvec::SmallVec;

/// Virtual frame interval, in milliseconds.
pub const FRAME_MS: i64 = 16;

/// Upper bound on frames pumped by [`DrawerRobot::wait_for_idle`].
pub const MAX_IDLE_FRAMES: usize = 600;

/// Horizontal position used for every scripted pointer event.
const POINTER_X: f32 = 200.0;

/// Scripted pointer stream for one gesture.
pub type PointerScript = SmallVec<[PointerEvent; 16]>;

/// Down at `from_y`, `steps - 1` evenly spaced moves, and an up at `to_y`,
/// spread over `duration_ms` starting at `start_ms`.
pub fn drag_script(
    from_y: f32,
    to_y: f32,
    start_ms: i64,
    duration_ms: i64,
    steps: usize,
) -> PointerScript {
    let steps = steps.max(1);
    let mut script = PointerScript::new();
    script.push(event(PointerEventKind::Down, from_y, start_ms));
    for i in 1..steps {
        let t = i as f32 / steps as f32;
        let y = from_y + (to_y - from_y) * t;
        let time = start_ms + duration_ms * i as i64 / steps as i64;
        script.push(event(PointerEventKind::Move, y, time));
    }
    script.push(event(
        PointerEventKind::Up,
        to_y,
        start_ms + duration_ms.max(1),
    ));
    script
}

fn event(kind: PointerEventKind, y: f32, time_ms: i64) -> PointerEvent {
    PointerEvent::new(kind, Point::new(POINTER_X, y), time_ms)
}

/// Drives a drawer through scripted gestures on a virtual clock.
pub struct DrawerRobot {
    drawer: DrawerController,
    time_ms: i64,
}

impl DrawerRobot {
    pub fn new(drawer: DrawerController) -> Self {
        Self { drawer, time_ms: 0 }
    }

    pub fn drawer(&self) -> &DrawerController {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut DrawerController {
        &mut self.drawer
    }

    pub fn into_inner(self) -> DrawerController {
        self.drawer
    }

    /// Current virtual time in milliseconds.
    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    /// Dispatch a script, returning how many events the drawer consumed.
    pub fn dispatch(&mut self, script: &[PointerEvent]) -> usize {
        let mut consumed = 0;
        for event in script {
            self.time_ms = self.time_ms.max(event.time_ms);
            if self.drawer.on_pointer_event(event) {
                consumed += 1;
            }
        }
        consumed
    }

    /// Press at `from_y`, drag to `to_y` over `duration_ms`, and release.
    ///
    /// Returns the state change the release produced, if any.
    pub fn drag(
        &mut self,
        from_y: f32,
        to_y: f32,
        duration_ms: i64,
        steps: usize,
    ) -> Option<StateChange> {
        let before = self.drawer.state();
        let script = drag_script(from_y, to_y, self.time_ms, duration_ms, steps);
        self.dispatch(&script);
        log::debug!(
            "robot drag {:.0} -> {:.0} over {}ms: {:?} -> {:?}",
            from_y,
            to_y,
            duration_ms,
            before,
            self.drawer.state()
        );
        change(before, self.drawer.state())
    }

    /// A quick 60ms flick.
    pub fn fling(&mut self, from_y: f32, to_y: f32) -> Option<StateChange> {
        self.drag(from_y, to_y, 60, 6)
    }

    /// Press and release in place. Returns whether the drawer consumed it.
    pub fn tap(&mut self, y: f32) -> bool {
        let start = self.time_ms;
        let down = event(PointerEventKind::Down, y, start);
        let up = event(PointerEventKind::Up, y, start + 50);
        self.dispatch(&[down, up]) > 0
    }

    /// Drag towards `to_y` in `steps` moves, then have the platform cancel.
    pub fn drag_and_cancel(&mut self, from_y: f32, to_y: f32, steps: usize) -> Option<StateChange> {
        let before = self.drawer.state();
        let steps = steps.max(1);
        let start = self.time_ms;
        let mut script = PointerScript::new();
        script.push(event(PointerEventKind::Down, from_y, start));
        for i in 1..=steps {
            let y = from_y + (to_y - from_y) * i as f32 / steps as f32;
            script.push(event(
                PointerEventKind::Move,
                y,
                start + FRAME_MS * i as i64,
            ));
        }
        script.push(event(
            PointerEventKind::Cancel,
            to_y,
            start + FRAME_MS * (steps as i64 + 1),
        ));
        self.dispatch(&script);
        change(before, self.drawer.state())
    }

    /// Advance one frame and return the rendered offset.
    pub fn advance_frame(&mut self) -> f32 {
        self.time_ms += FRAME_MS;
        self.drawer.on_frame(self.frame_nanos())
    }

    /// Advance frames covering at least `millis`.
    pub fn advance_time(&mut self, millis: i64) -> f32 {
        let target = self.time_ms + millis;
        let mut offset = self.drawer.offset();
        while self.time_ms < target {
            offset = self.advance_frame();
        }
        offset
    }

    /// Pump frames until the settle animation stops; returns the final offset.
    pub fn wait_for_idle(&mut self) -> f32 {
        // Anchor frame for a freshly started animation.
        let mut offset = self.drawer.on_frame(self.frame_nanos());
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.drawer.is_animating() {
                return offset;
            }
            offset = self.advance_frame();
        }
        log::warn!(
            "drawer still animating after {} frames at offset {:.1}",
            MAX_IDLE_FRAMES,
            offset
        );
        offset
    }

    fn frame_nanos(&self) -> u64 {
        self.time_ms.max(0) as u64 * 1_000_000
    }
}

fn change(from: DrawerState, to: DrawerState) -> Option<StateChange> {
    (from != to).then_some(StateChange { from, to })
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;

//! Drawer state, offsets and gesture orchestration.
//!
//! Coordinates are in logical pixels with y growing downward. Pointer
//! positions are relative to the drawer's container, whose top edge is where
//! the panel's top sits when fully expanded; the panel therefore spans
//! `[offset, max_height]`.

use std::mem;

use juka_animation::Animatable;
use juka_foundation::{
    DragSample, GestureSampler, InvalidStateError, Point, PointerEvent, PointerEventKind,
    TapDetector,
};

use crate::config::DrawerConfig;
use crate::snap::SnapResolver;
use crate::state::DrawerState;

/// A resolved change of resting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub from: DrawerState,
    pub to: DrawerState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointerRoute {
    Idle,
    /// Down on the panel, not yet beyond the touch slop.
    Pressed { on_handle: bool },
    Dragging,
}

/// Owns the drawer's state and computes the offset to render.
///
/// Drags can be fed either as raw pointer events through
/// [`on_pointer_event`](Self::on_pointer_event), which also recognises taps on
/// the handle, or through the explicit `on_drag_*` / `on_gesture_*` calls.
#[derive(Debug, Clone)]
pub struct DrawerController {
    config: DrawerConfig,
    state: DrawerState,
    /// Natural content height; infinite until the host measures it.
    content_height: f32,
    sampler: GestureSampler,
    tap: TapDetector,
    route: PointerRoute,
    /// Rendered offset when the current drag began; `None` while not dragging.
    drag_base: Option<f32>,
    live_translation: f32,
    settle: Animatable<f32>,
}

impl DrawerController {
    pub fn new(config: DrawerConfig, initial_state: DrawerState) -> Self {
        let content_height = f32::INFINITY;
        let resting = config.target_offset(initial_state, content_height);
        Self {
            config,
            state: initial_state,
            content_height,
            sampler: GestureSampler::new(),
            tap: TapDetector::new(),
            route: PointerRoute::Idle,
            drag_base: None,
            live_translation: 0.0,
            settle: Animatable::new(resting),
        }
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_base.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_running()
    }

    /// Current drag translation; zero whenever no drag is active.
    pub fn live_translation(&self) -> f32 {
        self.live_translation
    }

    pub fn measured_content_height(&self) -> Option<f32> {
        self.content_height.is_finite().then_some(self.content_height)
    }

    pub fn target_offset(&self, state: DrawerState, measured_content_height: f32) -> f32 {
        self.config.target_offset(state, measured_content_height)
    }

    /// Where the drawer comes to rest in its current state.
    pub fn resting_offset(&self) -> f32 {
        self.target_offset(self.state, self.content_height)
    }

    /// Offset to render now, without advancing any animation.
    pub fn offset(&self) -> f32 {
        match self.drag_base {
            Some(base) => self.config.clamp_offset(base + self.live_translation),
            None => self.config.clamp_offset(self.settle.value()),
        }
    }

    /// Visible panel height for the current offset.
    pub fn visible_height(&self) -> f32 {
        self.config.max_height() - self.offset()
    }

    /// Visible panel height once the drawer settles in its current state.
    pub fn resting_visible_height(&self) -> f32 {
        self.config.max_height() - self.resting_offset()
    }

    /// Advance the settle animation to `frame_time_nanos` and return the
    /// offset to render.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> f32 {
        if self.drag_base.is_none() {
            self.settle.on_frame(frame_time_nanos);
        }
        self.offset()
    }

    /// Record the natural height of the drawer's content.
    ///
    /// Non-finite heights mean "unknown" and size half expanded by
    /// `half_height` alone.
    pub fn set_measured_content_height(&mut self, height: f32) {
        let height = if height.is_finite() {
            height.max(0.0)
        } else {
            f32::INFINITY
        };
        if height == self.content_height {
            return;
        }

        let previous_target = self.resting_offset();
        self.content_height = height;
        let target = self.resting_offset();
        if self.is_dragging() || target == previous_target {
            return;
        }

        if self.settle.is_running() {
            let velocity = self.settle.velocity();
            self.settle
                .animate_to_with_velocity(target, self.config.settle_animation(), velocity);
        } else {
            self.settle.snap_to(target);
        }
    }

    pub fn panel_contains(&self, y: f32) -> bool {
        y >= self.offset() && y <= self.config.max_height()
    }

    pub fn handle_contains(&self, y: f32) -> bool {
        let top = self.offset();
        y >= top && y <= top + self.config.handle_allowance()
    }

    pub fn on_drag_start(&mut self, position: Point, time_ms: i64) {
        self.sampler.on_drag_start(position, time_ms);
        self.begin_follow();
    }

    pub fn on_drag_move(
        &mut self,
        position: Point,
        time_ms: i64,
    ) -> Result<f32, InvalidStateError> {
        let sample = self.sampler.on_drag_move(position, time_ms)?;
        Ok(self.on_gesture_update(sample))
    }

    pub fn on_drag_end(
        &mut self,
        position: Point,
        time_ms: i64,
    ) -> Result<Option<StateChange>, InvalidStateError> {
        let sample = self.sampler.on_drag_end(position, time_ms)?;
        Ok(self.on_gesture_end(sample))
    }

    /// A platform cancellation resolves like a release at the last sample.
    pub fn on_drag_cancel(&mut self) -> Result<Option<StateChange>, InvalidStateError> {
        let sample = self.sampler.on_drag_cancel()?;
        Ok(self.on_gesture_end(sample))
    }

    /// Live follow: the panel tracks the finger from where the drag began.
    pub fn on_gesture_update(&mut self, sample: DragSample) -> f32 {
        if self.drag_base.is_none() {
            self.begin_follow();
        }
        if sample.translation.is_finite() {
            self.live_translation = sample.translation;
        }
        self.offset()
    }

    /// Resolve the released drag and start settling towards the new state.
    pub fn on_gesture_end(&mut self, sample: DragSample) -> Option<StateChange> {
        let release_offset = match self.drag_base.take() {
            Some(base) if sample.translation.is_finite() => {
                self.config.clamp_offset(base + sample.translation)
            }
            Some(base) => self.config.clamp_offset(base + self.live_translation),
            None => self.offset(),
        };
        self.live_translation = 0.0;

        let from = self.state;
        let decision = SnapResolver::decide(sample, &self.config);
        let to = decision.apply(from);
        log::debug!(
            "drawer release: {:?} translation={:.1} velocity={:.1} -> {:?}",
            decision,
            sample.translation,
            sample.predicted_velocity,
            to
        );
        self.state = to;

        let velocity = if sample.predicted_velocity.is_finite() {
            sample.predicted_velocity
        } else {
            0.0
        };
        self.settle.snap_to(release_offset);
        self.settle.animate_to_with_velocity(
            self.resting_offset(),
            self.config.settle_animation(),
            velocity,
        );

        (from != to).then_some(StateChange { from, to })
    }

    /// Tap-to-toggle: `Collapsed → HalfExpanded → FullyExpanded → HalfExpanded`.
    pub fn toggle_state(&mut self) -> StateChange {
        let from = self.state;
        let to = from.toggled();
        self.set_state(to, true);
        StateChange { from, to }
    }

    /// Move to `state` programmatically, abandoning any gesture in progress.
    pub fn set_state(&mut self, state: DrawerState, animated: bool) -> Option<StateChange> {
        let current = self.offset();
        self.abandon_gesture();
        self.settle.snap_to(current);

        let from = self.state;
        self.state = state;
        let target = self.resting_offset();
        if animated {
            // Keep momentum when retargeting a settle already in flight.
            let velocity = self.settle.velocity();
            self.settle
                .animate_to_with_velocity(target, self.config.settle_animation(), velocity);
        } else {
            self.settle.snap_to(target);
        }

        if from != state {
            log::debug!("drawer state set: {:?} -> {:?}", from, state);
        }
        (from != state).then_some(StateChange { from, to: state })
    }

    /// Route a raw pointer event. Returns whether the drawer consumed it, in
    /// which case the event is also marked consumed.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let consumed = match event.kind {
            PointerEventKind::Down => self.pointer_down(event.position, event.time_ms),
            PointerEventKind::Move => self.pointer_move(event.position, event.time_ms),
            PointerEventKind::Up => self.pointer_up(event.position, event.time_ms),
            PointerEventKind::Cancel => self.pointer_cancel(),
        };
        if consumed {
            event.consume();
        }
        consumed
    }

    fn pointer_down(&mut self, position: Point, time_ms: i64) -> bool {
        if self.route != PointerRoute::Idle {
            log::warn!("pointer down while another press is in progress; ignoring");
            return false;
        }
        if !self.panel_contains(position.y) {
            return false;
        }

        let on_handle = self.handle_contains(position.y);
        self.tap.on_press(position);
        // Catch the panel: a press stops any settle in flight.
        self.on_drag_start(position, time_ms);
        self.route = PointerRoute::Pressed { on_handle };
        on_handle
    }

    fn pointer_move(&mut self, position: Point, time_ms: i64) -> bool {
        let on_handle = match self.route {
            PointerRoute::Idle => return false,
            PointerRoute::Pressed { on_handle } => on_handle,
            PointerRoute::Dragging => true,
        };

        let sample = match self.sampler.on_drag_move(position, time_ms) {
            Ok(sample) => sample,
            Err(err) => {
                log::warn!("dropping pointer move: {err}");
                self.route = PointerRoute::Idle;
                return false;
            }
        };

        if self.route != PointerRoute::Dragging && self.tap.on_move(position) {
            self.route = PointerRoute::Dragging;
        }
        if self.route == PointerRoute::Dragging {
            self.on_gesture_update(sample);
            return true;
        }
        on_handle
    }

    fn pointer_up(&mut self, position: Point, time_ms: i64) -> bool {
        match mem::replace(&mut self.route, PointerRoute::Idle) {
            PointerRoute::Idle => false,
            PointerRoute::Pressed { on_handle } => {
                if self.tap.on_release(position) {
                    if let Err(err) = self.sampler.on_drag_cancel() {
                        log::warn!("tap release: {err}");
                    }
                    self.release_without_snap();
                    if on_handle {
                        self.toggle_state();
                    }
                    on_handle
                } else {
                    // Jumped beyond the slop with no intermediate moves.
                    self.finish_drag(position, time_ms);
                    true
                }
            }
            PointerRoute::Dragging => {
                self.tap.reset();
                self.finish_drag(position, time_ms);
                true
            }
        }
    }

    fn pointer_cancel(&mut self) -> bool {
        self.tap.reset();
        match mem::replace(&mut self.route, PointerRoute::Idle) {
            PointerRoute::Idle => false,
            PointerRoute::Pressed { on_handle } => {
                if let Err(err) = self.sampler.on_drag_cancel() {
                    log::warn!("pointer cancel: {err}");
                }
                self.release_without_snap();
                on_handle
            }
            PointerRoute::Dragging => {
                if let Err(err) = self.on_drag_cancel() {
                    log::warn!("pointer cancel: {err}");
                }
                true
            }
        }
    }

    fn finish_drag(&mut self, position: Point, time_ms: i64) {
        if let Err(err) = self.on_drag_end(position, time_ms) {
            log::warn!("pointer up: {err}");
        }
    }

    fn begin_follow(&mut self) {
        let base = self.offset();
        if self.settle.is_running() {
            log::trace!("drag caught settling drawer at {:.1}", base);
        }
        self.settle.snap_to(base);
        self.drag_base = Some(base);
        self.live_translation = 0.0;
    }

    /// End a press that never became a drag: no snap resolution, just return
    /// to the resting offset if a caught settle was interrupted.
    fn release_without_snap(&mut self) {
        let current = self.offset();
        self.drag_base = None;
        self.live_translation = 0.0;
        self.settle.snap_to(current);
        let target = self.resting_offset();
        if current != target {
            self.settle.animate_to(target, self.config.settle_animation());
        }
    }

    fn abandon_gesture(&mut self) {
        if self.sampler.is_active() {
            let _ = self.sampler.on_drag_cancel();
        }
        self.tap.reset();
        self.route = PointerRoute::Idle;
        self.drag_base = None;
        self.live_translation = 0.0;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

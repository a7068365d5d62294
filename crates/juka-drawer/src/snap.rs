//! Release-time snap resolution.

use juka_foundation::DragSample;

use crate::config::DrawerConfig;
use crate::state::DrawerState;

/// What a released drag asks the drawer to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapDecision {
    /// Not confirmed; return to the current state.
    Settle,
    StepUp,
    StepDown,
}

impl SnapDecision {
    /// The state this decision leads to from `current`.
    pub fn apply(self, current: DrawerState) -> DrawerState {
        match self {
            SnapDecision::Settle => current,
            SnapDecision::StepUp => current.step_up(),
            SnapDecision::StepDown => current.step_down(),
        }
    }
}

/// Maps `(current state, final sample)` to the next state.
///
/// A release is confirmed when the displacement is strictly beyond the drag
/// threshold, or when the velocity is strictly beyond the velocity threshold
/// in the drag's direction. A confirmed release moves exactly one level.
pub struct SnapResolver;

impl SnapResolver {
    pub fn decide(sample: DragSample, config: &DrawerConfig) -> SnapDecision {
        let displacement = sample.translation;
        let velocity = sample.predicted_velocity;

        // With no net displacement the flick alone picks the direction.
        let direction = if displacement.abs() > f32::EPSILON {
            displacement.signum()
        } else if velocity != 0.0 && !velocity.is_nan() {
            velocity.signum()
        } else {
            return SnapDecision::Settle;
        };

        let by_distance = displacement.abs() > config.drag_threshold();
        let by_velocity =
            velocity.abs() > config.snap_velocity_threshold() && velocity.signum() == direction;

        if !(by_distance || by_velocity) {
            SnapDecision::Settle
        } else if direction > 0.0 {
            SnapDecision::StepDown
        } else {
            SnapDecision::StepUp
        }
    }

    pub fn resolve(current: DrawerState, sample: DragSample, config: &DrawerConfig) -> DrawerState {
        Self::decide(sample, config).apply(current)
    }
}

#[cfg(test)]
#[path = "tests/snap_tests.rs"]
mod tests;

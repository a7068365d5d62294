//! Drag gesture sampling.
//!
//! [`GestureSampler`] follows exactly one drag at a time and converts the
//! pointer stream into [`DragSample`]s: vertical translation since the drag
//! started plus a running velocity estimate.

use std::fmt;

use crate::gesture_constants::MAX_FLING_VELOCITY;
use crate::nodes::input::types::Point;
use crate::velocity_tracker::VelocityTracker1D;

/// One observation of an in-flight drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSample {
    /// Cumulative vertical displacement since drag start, positive downward.
    pub translation: f32,
    /// Estimated velocity at release in px/sec, positive downward.
    pub predicted_velocity: f32,
}

impl DragSample {
    pub const ZERO: DragSample = DragSample {
        translation: 0.0,
        predicted_velocity: 0.0,
    };

    pub const fn new(translation: f32, predicted_velocity: f32) -> Self {
        Self {
            translation,
            predicted_velocity,
        }
    }
}

/// Gesture API misuse by the integrating layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateError {
    NoActiveDrag { operation: &'static str },
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidStateError::NoActiveDrag { operation } => {
                write!(f, "{operation} called without an active drag")
            }
        }
    }
}

impl std::error::Error for InvalidStateError {}

/// Tracks a single active drag.
#[derive(Clone, Debug)]
pub struct GestureSampler {
    /// Pointer position at drag start; `None` while idle.
    origin: Option<Point>,
    tracker: VelocityTracker1D,
    last_sample: DragSample,
    max_velocity: f32,
}

impl Default for GestureSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureSampler {
    pub fn new() -> Self {
        Self::with_max_velocity(MAX_FLING_VELOCITY)
    }

    pub fn with_max_velocity(max_velocity: f32) -> Self {
        Self {
            origin: None,
            tracker: VelocityTracker1D::new(),
            last_sample: DragSample::ZERO,
            max_velocity,
        }
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// The most recent sample of the current (or last finished) drag.
    pub fn last_sample(&self) -> DragSample {
        self.last_sample
    }

    /// Begin a drag at `position`. Restarts any drag already in progress.
    pub fn on_drag_start(&mut self, position: Point, time_ms: i64) {
        if self.origin.is_some() {
            log::trace!("drag restarted before the previous one ended");
        }
        self.origin = Some(position);
        self.tracker.reset();
        self.tracker.add_position(position, time_ms);
        self.last_sample = DragSample::ZERO;
    }

    pub fn on_drag_move(
        &mut self,
        position: Point,
        time_ms: i64,
    ) -> Result<DragSample, InvalidStateError> {
        let origin = self.origin.ok_or(InvalidStateError::NoActiveDrag {
            operation: "on_drag_move",
        })?;
        Ok(self.sample(origin, position, time_ms))
    }

    /// Emit the terminal sample and go idle.
    pub fn on_drag_end(
        &mut self,
        position: Point,
        time_ms: i64,
    ) -> Result<DragSample, InvalidStateError> {
        let origin = self.origin.take().ok_or(InvalidStateError::NoActiveDrag {
            operation: "on_drag_end",
        })?;
        Ok(self.sample(origin, position, time_ms))
    }

    /// End the drag without a release position; the last known sample is final.
    pub fn on_drag_cancel(&mut self) -> Result<DragSample, InvalidStateError> {
        self.origin.take().ok_or(InvalidStateError::NoActiveDrag {
            operation: "on_drag_cancel",
        })?;
        Ok(self.last_sample)
    }

    fn sample(&mut self, origin: Point, position: Point, time_ms: i64) -> DragSample {
        self.tracker.add_position(position, time_ms);
        let sample = DragSample {
            translation: position.y - origin.y,
            predicted_velocity: self.tracker.velocity_clamped(self.max_velocity),
        };
        log::trace!(
            "drag sample: translation={:.1} velocity={:.1}",
            sample.translation,
            sample.predicted_velocity
        );
        self.last_sample = sample;
        sample
    }
}

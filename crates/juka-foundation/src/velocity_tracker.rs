//! Release velocity for vertical drags.
//!
//! Impulse strategy: each segment between consecutive samples adds the work
//! needed to bring a unit mass from the running velocity to the segment's
//! velocity. A single jittery sample moves the estimate less than it would a
//! plain finite difference.

use crate::nodes::input::Point;

/// Samples kept per drag.
const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest one, are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between consecutive samples means the finger stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    y: f32,
}

/// Tracks the vertical velocity of one pointer in px/sec, positive downward.
///
/// ```
/// use juka_foundation::{Point, VelocityTracker1D};
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_position(Point::new(0.0, 0.0), 0);
/// tracker.add_position(Point::new(0.0, 10.0), 10);
/// assert_eq!(tracker.velocity(), 1_000.0);
/// ```
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    ring: [Sample; HISTORY_SIZE],
    /// Slot the next sample is written to.
    next: usize,
    len: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            ring: [Sample::default(); HISTORY_SIZE],
            next: 0,
            len: 0,
        }
    }

    pub fn add_position(&mut self, position: Point, time_ms: i64) {
        self.ring[self.next] = Sample {
            time_ms,
            y: position.y,
        };
        self.next = (self.next + 1) % HISTORY_SIZE;
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    pub fn reset(&mut self) {
        self.next = 0;
        self.len = 0;
    }

    /// Current estimate; zero until two samples fall inside the horizon with
    /// no stop between them.
    pub fn velocity(&self) -> f32 {
        let mut window = [Sample::default(); HISTORY_SIZE];
        let mut count = 0;
        for sample in self.newest_first() {
            if count > 0 {
                let newer = window[count - 1];
                if newer.time_ms - sample.time_ms > ASSUME_STOPPED_MS
                    || window[0].time_ms - sample.time_ms > HORIZON_MS
                {
                    break;
                }
            }
            window[count] = sample;
            count += 1;
        }
        if count < 2 {
            return 0.0;
        }

        // Oldest segment first.
        let mut work = 0.0f32;
        for i in (1..count).rev() {
            let (older, newer) = (window[i], window[i - 1]);
            let dt = (newer.time_ms - older.time_ms) as f32;
            if dt <= 0.0 {
                continue;
            }
            let segment = (newer.y - older.y) / dt;
            work += (segment - energy_to_velocity(work)) * segment.abs();
            if i == count - 1 {
                work *= 0.5;
            }
        }
        energy_to_velocity(work) * 1000.0
    }

    /// [`velocity`](Self::velocity) limited to `±max`; zero for a non-positive
    /// or non-finite limit.
    pub fn velocity_clamped(&self, max: f32) -> f32 {
        if !max.is_finite() || max <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max, max)
    }

    fn newest_first(&self) -> impl Iterator<Item = Sample> + '_ {
        (1..=self.len).map(move |back| {
            self.ring[(self.next + HISTORY_SIZE - back) % HISTORY_SIZE]
        })
    }
}

/// Kinetic energy of a unit mass back to a signed speed.
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;

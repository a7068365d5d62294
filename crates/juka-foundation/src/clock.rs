//! Monotonic timestamps for pointer events and animation frames.

use web_time::Instant;

/// Clock anchored at its creation instant.
///
/// Velocity tracking works on millisecond timestamps and the settle animation
/// on frame nanoseconds; both only need to be monotonic relative to a common
/// origin, so one clock per drawer screen is enough.
#[derive(Clone, Copy, Debug)]
pub struct GestureClock {
    origin: Instant,
}

impl Default for GestureClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }

    /// Nanoseconds since the clock was created, saturating at `u64::MAX`.
    pub fn now_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

//! Pointer input, velocity tracking and gesture recognisers for Juka drawers
//!
//! Everything in this crate is plain synchronous state. Platform layers feed
//! timestamped [`PointerEvent`]s in; gesture recognisers turn them into drag
//! samples and taps.

pub mod clock;
pub mod gesture_constants;
pub mod nodes;
pub mod velocity_tracker;

pub use clock::GestureClock;
pub use gesture_constants::*;
pub use nodes::input::gestures::{DragSample, GestureSampler, InvalidStateError, TapDetector};
pub use nodes::input::{Point, PointerEvent, PointerEventKind};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::clock::GestureClock;
    pub use crate::gesture_constants::{MAX_FLING_VELOCITY, TOUCH_SLOP};
    pub use crate::nodes::input::gestures::{
        DragSample, GestureSampler, InvalidStateError, TapDetector,
    };
    pub use crate::nodes::input::prelude::*;
    pub use crate::velocity_tracker::VelocityTracker1D;
}

pub mod drag;
pub mod tap;

pub use drag::{DragSample, GestureSampler, InvalidStateError};
pub use tap::TapDetector;

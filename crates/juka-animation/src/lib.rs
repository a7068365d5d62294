//! Frame-driven animations for Juka drawers
//!
//! Animations here own no clock. The renderer passes the current frame time
//! into [`Animatable::on_frame`] and reads back the value to draw, which keeps
//! every animation deterministic under test.

mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{
        Animatable, AnimationSpec, AnimationType, Easing, Lerp, SpringScalar, SpringSpec,
    };
}

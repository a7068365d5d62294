//! Snapping bottom drawer for Juka
//!
//! A bottom-anchored panel with three resting heights. The user drags it
//! between them; on release a [`SnapResolver`] picks the next state (at most
//! one step away) and the [`DrawerController`] animates the panel there.
//!
//! The crate is renderer agnostic: it consumes pointer events and exposes a
//! single vertical offset, measured downward from the fully expanded
//! position, for the host to apply each frame.

mod config;
mod controller;
mod overlay;
mod snap;
mod state;

pub use config::*;
pub use controller::*;
pub use overlay::*;
pub use snap::*;
pub use state::*;

pub use juka_foundation::{DragSample, InvalidStateError};

pub mod prelude {
    pub use crate::config::{ConfigError, DrawerConfig, DrawerConfigBuilder};
    pub use crate::controller::{DrawerController, StateChange};
    pub use crate::overlay::{FloatingOverlay, FloatingPlacement};
    pub use crate::snap::{SnapDecision, SnapResolver};
    pub use crate::state::DrawerState;
    pub use juka_foundation::prelude::*;
}

//! Shared gesture constants for consistent touch/pointer handling.
//!
//! # DPI Considerations
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Touch slop in logical pixels.
///
/// If the pointer moves more than this distance from the initial press
/// position the press is a drag, and a tap will not fire on release.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

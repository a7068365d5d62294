//! Placement of a floating control that sits above the drawer.

use crate::controller::DrawerController;
use crate::state::DrawerState;

/// Gap between the floating control and the drawer's top edge.
pub const FLOATING_MARGIN: f32 = 20.0;

/// Where to put a floating action control relative to the drawer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingPlacement {
    /// Hidden while the drawer is fully expanded.
    pub visible: bool,
    /// Distance from the container's bottom edge.
    pub bottom_padding: f32,
}

/// Keeps a floating control clear of the drawer's resting height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingOverlay {
    margin: f32,
}

impl Default for FloatingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatingOverlay {
    pub fn new() -> Self {
        Self::with_margin(FLOATING_MARGIN)
    }

    pub fn with_margin(margin: f32) -> Self {
        Self {
            margin: if margin.is_finite() { margin } else { 0.0 },
        }
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Placement for the drawer's current state. Follows the resting height,
    /// not the live offset, so the control does not jitter during a drag.
    pub fn placement(&self, drawer: &DrawerController) -> FloatingPlacement {
        self.placement_for(drawer.state(), drawer.resting_visible_height())
    }

    pub fn placement_for(&self, state: DrawerState, drawer_height: f32) -> FloatingPlacement {
        FloatingPlacement {
            visible: state != DrawerState::FullyExpanded,
            bottom_padding: drawer_height.max(0.0) + self.margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawerConfig;
    use juka_foundation::DragSample;

    fn controller(state: DrawerState) -> DrawerController {
        DrawerController::new(DrawerConfig::default(), state)
    }

    #[test]
    fn sits_above_the_resting_drawer() {
        let overlay = FloatingOverlay::new();
        assert_eq!(
            overlay.placement(&controller(DrawerState::HalfExpanded)),
            FloatingPlacement {
                visible: true,
                bottom_padding: 320.0
            }
        );
        assert_eq!(
            overlay
                .placement(&controller(DrawerState::Collapsed))
                .bottom_padding,
            170.0
        );
    }

    #[test]
    fn hidden_when_fully_expanded() {
        let placement = FloatingOverlay::new().placement(&controller(DrawerState::FullyExpanded));
        assert!(!placement.visible);
    }

    #[test]
    fn ignores_live_drag() {
        let overlay = FloatingOverlay::with_margin(8.0);
        let mut drawer = controller(DrawerState::HalfExpanded);
        drawer.on_gesture_update(DragSample::new(90.0, 0.0));
        assert_eq!(overlay.placement(&drawer).bottom_padding, 308.0);
    }

    #[test]
    fn tracks_short_content() {
        let mut drawer = controller(DrawerState::HalfExpanded);
        drawer.set_measured_content_height(100.0);
        assert_eq!(
            FloatingOverlay::new().placement(&drawer).bottom_padding,
            180.0
        );
    }
}

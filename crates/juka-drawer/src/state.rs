/// Resting position of the drawer, ordered from lowest to highest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawerState {
    Collapsed,
    #[default]
    HalfExpanded,
    FullyExpanded,
}

impl DrawerState {
    pub const ALL: [DrawerState; 3] = [
        DrawerState::Collapsed,
        DrawerState::HalfExpanded,
        DrawerState::FullyExpanded,
    ];

    /// One level higher, saturating at `FullyExpanded`.
    pub fn step_up(self) -> Self {
        match self {
            DrawerState::Collapsed => DrawerState::HalfExpanded,
            DrawerState::HalfExpanded | DrawerState::FullyExpanded => DrawerState::FullyExpanded,
        }
    }

    /// One level lower, saturating at `Collapsed`.
    pub fn step_down(self) -> Self {
        match self {
            DrawerState::FullyExpanded => DrawerState::HalfExpanded,
            DrawerState::HalfExpanded | DrawerState::Collapsed => DrawerState::Collapsed,
        }
    }

    /// Next state for a tap on the handle. A fully expanded drawer goes back
    /// to half, never straight to collapsed.
    pub fn toggled(self) -> Self {
        match self {
            DrawerState::Collapsed => DrawerState::HalfExpanded,
            DrawerState::HalfExpanded => DrawerState::FullyExpanded,
            DrawerState::FullyExpanded => DrawerState::HalfExpanded,
        }
    }

    /// Distance in levels between two states.
    pub fn steps_to(self, other: DrawerState) -> usize {
        (self as usize).abs_diff(other as usize)
    }
}

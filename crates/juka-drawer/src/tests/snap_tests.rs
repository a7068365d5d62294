use super::*;

fn config() -> DrawerConfig {
    DrawerConfig::new(150.0, 300.0, 600.0, 50.0, 100.0).expect("valid config")
}

fn resolve(current: DrawerState, translation: f32, velocity: f32) -> DrawerState {
    SnapResolver::resolve(current, DragSample::new(translation, velocity), &config())
}

#[test]
fn upward_drag_past_threshold_expands_fully() {
    assert_eq!(
        resolve(DrawerState::HalfExpanded, -80.0, -20.0),
        DrawerState::FullyExpanded
    );
}

#[test]
fn small_slow_drag_snaps_back() {
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 10.0, 5.0),
        DrawerState::HalfExpanded
    );
}

#[test]
fn threshold_is_exclusive() {
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 50.0, 0.0),
        DrawerState::HalfExpanded
    );
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 50.01, 0.0),
        DrawerState::Collapsed
    );
    assert_eq!(
        resolve(DrawerState::HalfExpanded, -50.0, 0.0),
        DrawerState::HalfExpanded
    );
}

#[test]
fn velocity_threshold_is_exclusive() {
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 10.0, 100.0),
        DrawerState::HalfExpanded
    );
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 10.0, 100.5),
        DrawerState::Collapsed
    );
}

#[test]
fn fast_flick_overrides_short_displacement() {
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 10.0, 200.0),
        DrawerState::Collapsed
    );
    assert_eq!(
        resolve(DrawerState::HalfExpanded, -10.0, -200.0),
        DrawerState::FullyExpanded
    );
}

#[test]
fn flick_against_the_drag_direction_does_not_confirm() {
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 10.0, -500.0),
        DrawerState::HalfExpanded
    );
    assert_eq!(
        resolve(DrawerState::HalfExpanded, -10.0, 500.0),
        DrawerState::HalfExpanded
    );
}

#[test]
fn distance_wins_even_when_velocity_disagrees() {
    // Dragged far down, then flicked back up before release.
    assert_eq!(
        resolve(DrawerState::FullyExpanded, 120.0, -400.0),
        DrawerState::HalfExpanded
    );
}

#[test]
fn zero_displacement_lets_velocity_pick_direction() {
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 0.0, 300.0),
        DrawerState::Collapsed
    );
    assert_eq!(
        resolve(DrawerState::HalfExpanded, 0.0, -300.0),
        DrawerState::FullyExpanded
    );
    assert_eq!(
        SnapResolver::decide(DragSample::ZERO, &config()),
        SnapDecision::Settle
    );
}

#[test]
fn drags_past_the_ends_are_no_ops() {
    for (translation, velocity) in [(500.0, 5_000.0), (60.0, 0.0), (5.0, 0.0)] {
        assert_eq!(
            resolve(DrawerState::Collapsed, translation, velocity),
            DrawerState::Collapsed
        );
    }
    for (translation, velocity) in [(-500.0, -5_000.0), (-60.0, 0.0), (-5.0, 0.0)] {
        assert_eq!(
            resolve(DrawerState::FullyExpanded, translation, velocity),
            DrawerState::FullyExpanded
        );
    }
}

#[test]
fn a_single_gesture_moves_at_most_one_level() {
    assert_eq!(
        resolve(DrawerState::Collapsed, -2_000.0, -8_000.0),
        DrawerState::HalfExpanded
    );
    assert_eq!(
        resolve(DrawerState::FullyExpanded, 2_000.0, 8_000.0),
        DrawerState::HalfExpanded
    );
}

#[test]
fn nan_sample_settles() {
    assert_eq!(
        SnapResolver::decide(DragSample::new(f32::NAN, f32::NAN), &config()),
        SnapDecision::Settle
    );
}

#[test]
fn decisions_apply_one_step() {
    assert_eq!(
        SnapDecision::StepUp.apply(DrawerState::Collapsed),
        DrawerState::HalfExpanded
    );
    assert_eq!(
        SnapDecision::StepDown.apply(DrawerState::Collapsed),
        DrawerState::Collapsed
    );
    for state in DrawerState::ALL {
        assert_eq!(SnapDecision::Settle.apply(state), state);
    }
}

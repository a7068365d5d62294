//! Property tests for drawer geometry and snap resolution over arbitrary
//! valid configurations and drag histories.

use juka_drawer::prelude::*;
use proptest::prelude::*;

const FRAME_NANOS: u64 = 16_666_667;

prop_compose! {
    fn valid_config()(
        min in 10.0f32..200.0,
        half_gap in 1.0f32..300.0,
        max_gap in 1.0f32..500.0,
        drag_threshold in 1.0f32..200.0,
        velocity_threshold in 1.0f32..2_000.0,
        allowance in 0.0f32..120.0,
    ) -> DrawerConfig {
        DrawerConfig::builder()
            .heights(min, min + half_gap, min + half_gap + max_gap)
            .drag_threshold(drag_threshold)
            .snap_velocity_threshold(velocity_threshold)
            .handle_allowance(allowance)
            .build()
            .expect("generated config is valid")
    }
}

fn any_state() -> impl Strategy<Value = DrawerState> {
    prop_oneof![
        Just(DrawerState::Collapsed),
        Just(DrawerState::HalfExpanded),
        Just(DrawerState::FullyExpanded),
    ]
}

fn in_range(config: &DrawerConfig, offset: f32) -> bool {
    (0.0..=config.collapsed_offset()).contains(&offset)
}

proptest! {
    #[test]
    fn target_offsets_stay_in_range(
        config in valid_config(),
        state in any_state(),
        content in -500.0f32..2_000.0,
    ) {
        prop_assert!(in_range(&config, config.target_offset(state, content)));
        prop_assert!(in_range(&config, config.target_offset(state, f32::INFINITY)));
    }

    #[test]
    fn live_offset_is_always_clamped(
        config in valid_config(),
        state in any_state(),
        translations in prop::collection::vec(-3_000.0f32..3_000.0, 1..24),
    ) {
        let mut drawer = DrawerController::new(config, state);
        for translation in translations {
            let offset = drawer.on_gesture_update(DragSample::new(translation, 0.0));
            prop_assert!(in_range(&config, offset));
        }
    }

    #[test]
    fn release_moves_at_most_one_level(
        config in valid_config(),
        state in any_state(),
        translation in -3_000.0f32..3_000.0,
        velocity in -8_000.0f32..8_000.0,
    ) {
        let sample = DragSample::new(translation, velocity);
        let next = SnapResolver::resolve(state, sample, &config);
        prop_assert!(state.steps_to(next) <= 1);

        if translation.abs() <= config.drag_threshold()
            && velocity.abs() <= config.snap_velocity_threshold()
        {
            prop_assert_eq!(next, state);
        }
    }

    #[test]
    fn drags_past_the_ends_are_no_ops(
        config in valid_config(),
        translation in 0.0f32..3_000.0,
        velocity in 0.0f32..8_000.0,
    ) {
        let down = DragSample::new(translation, velocity);
        let up = DragSample::new(-translation, -velocity);
        prop_assert_eq!(
            SnapResolver::resolve(DrawerState::Collapsed, down, &config),
            DrawerState::Collapsed
        );
        prop_assert_eq!(
            SnapResolver::resolve(DrawerState::FullyExpanded, up, &config),
            DrawerState::FullyExpanded
        );
    }

    #[test]
    fn release_settles_at_resting_offset(
        config in valid_config(),
        state in any_state(),
        translation in -1_000.0f32..1_000.0,
        velocity in -8_000.0f32..8_000.0,
    ) {
        let mut drawer = DrawerController::new(config, state);
        drawer.on_gesture_update(DragSample::new(translation, velocity));
        drawer.on_gesture_end(DragSample::new(translation, velocity));

        let mut frame_time = 0;
        for _ in 0..1_000 {
            let offset = drawer.on_frame(frame_time);
            prop_assert!(in_range(&config, offset));
            if !drawer.is_animating() {
                break;
            }
            frame_time += FRAME_NANOS;
        }
        prop_assert!(!drawer.is_animating());
        prop_assert_eq!(drawer.offset(), drawer.resting_offset());
    }
}

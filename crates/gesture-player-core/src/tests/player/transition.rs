use crate::{
    BRIGHTNESS_STEP, Command, CoreError, Direction, Effect, ErrorKind, PLAYBACK_MODES,
    PlayerState, VOLUME_STEP, apply,
};

fn after(state: &PlayerState, commands: &[Command]) -> PlayerState {
    commands.iter().fold(state.clone(), |s, c| apply(&s, c).unwrap().state)
}

/// WHAT: Default state matches the documented startup values
/// WHY: Clients poll the state immediately after startup
#[test]
fn given_fresh_state_when_inspected_then_defaults_reported() {
    // Given/When: A default state
    let state = PlayerState::default();

    // Then: Startup values hold
    assert!(!state.is_playing());
    assert_eq!(state.volume(), 50);
    assert!(!state.is_muted());
    assert!(!state.is_fullscreen());
    assert_eq!(state.brightness(), 50);
    assert!((state.playback_speed() - 1.0).abs() < f64::EPSILON);
    assert_eq!(state.current_video(), "sample1.mp4");
    assert_eq!(state.current_time(), 0);
    assert_eq!(state.mode(), "normal");
    assert!(!state.progress_visible());
}

/// WHAT: SetVolume and SetBrightness clamp into 0..=100
/// WHY: Levels outside the range would break every client slider
#[test]
fn given_any_level_in_range_when_setting_then_clamped() {
    // Given: The default state
    let state = PlayerState::default();

    for v in -1000..=1000i64 {
        // When: Setting volume and brightness to v
        let volume = apply(&state, &Command::SetVolume(v)).unwrap().state.volume();
        let brightness = apply(&state, &Command::SetBrightness(v))
            .unwrap()
            .state
            .brightness();

        // Then: Both equal clamp(v, 0, 100)
        let expected = v.clamp(0, 100);
        assert_eq!(i64::from(volume), expected, "volume for {}", v);
        assert_eq!(i64::from(brightness), expected, "brightness for {}", v);
    }
}

/// WHAT: Extreme level values clamp without overflow
/// WHY: Request bodies can carry any i64
#[test]
fn given_extreme_levels_when_setting_then_clamped() {
    // Given/When/Then
    let state = PlayerState::default();
    assert_eq!(apply(&state, &Command::SetVolume(i64::MAX)).unwrap().state.volume(), 100);
    assert_eq!(apply(&state, &Command::SetVolume(i64::MIN)).unwrap().state.volume(), 0);
}

/// WHAT: Non-negative seeks add exactly; negative seeks stop at zero
/// WHY: Playback position must never go negative
#[test]
fn given_positions_and_offsets_when_seeking_then_position_clamped_at_zero() {
    // Given: Several starting positions
    for start in [0u64, 1, 999, 5_000, 60_000] {
        let state = after(&PlayerState::default(), &[Command::Seek(start as i64)]);
        assert_eq!(state.current_time(), start);

        for offset in [-100_000i64, -5_000, -1, 0, 1, 250, 90_000] {
            // When: Seeking by offset
            let next = apply(&state, &Command::Seek(offset)).unwrap().state;

            // Then: max(0, start + offset)
            let expected = (start as i64 + offset).max(0) as u64;
            assert_eq!(next.current_time(), expected, "start {} offset {}", start, offset);
        }
    }
}

/// WHAT: Seeking to i64::MIN from zero clamps to zero
/// WHY: Saturating arithmetic must cover the full offset range
#[test]
fn given_minimum_offset_when_seeking_then_zero() {
    // Given/When/Then
    let state = PlayerState::default();
    assert_eq!(apply(&state, &Command::Seek(i64::MIN)).unwrap().state.current_time(), 0);
}

/// WHAT: Applying a toggle twice restores the original flag
/// WHY: Toggles must be exact inverses of themselves
#[test]
fn given_toggle_commands_when_applied_twice_then_original_restored() {
    // Given: The default state and a state with every flag set
    let flipped = after(
        &PlayerState::default(),
        &[
            Command::ToggleMute,
            Command::ToggleFullscreen,
            Command::ToggleProgressBar,
            Command::TogglePlay,
        ],
    );
    assert!(flipped.is_muted() && flipped.is_fullscreen());
    assert!(flipped.progress_visible() && flipped.is_playing());

    for state in [PlayerState::default(), flipped] {
        for toggle in [
            Command::ToggleMute,
            Command::ToggleFullscreen,
            Command::ToggleProgressBar,
            Command::TogglePlay,
        ] {
            // When: Applying the toggle twice
            let once = apply(&state, &toggle).unwrap().state;
            let twice = apply(&once, &toggle).unwrap().state;

            // Then: The first flips, the second restores
            assert_ne!(once, state, "{}", toggle);
            assert_eq!(twice, state, "{}", toggle);
        }
    }
}

/// WHAT: Non-positive or non-finite speeds are rejected
/// WHY: Playback speed must stay positive
#[test]
fn given_invalid_speed_when_applying_then_invalid_parameter_error() {
    // Given: A default state
    let state = PlayerState::default();

    for v in [0.0, -1.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        // When: Applying SetSpeed(v)
        let result = apply(&state, &Command::SetSpeed(v));

        // Then: InvalidInput, and the input state is untouched
        let err = result.unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(state, PlayerState::default());
    }
}

/// WHAT: Positive speeds are applied without clamping
/// WHY: Only positivity is enforced on speed
#[test]
fn given_positive_speed_when_applying_then_set_exactly() {
    // Given/When
    let state = apply(&PlayerState::default(), &Command::SetSpeed(16.0)).unwrap().state;

    // Then
    assert!((state.playback_speed() - 16.0).abs() < f64::EPSILON);
}

/// WHAT: Any mode name is stored exactly as given, including blank ones
/// WHY: Mode is free-form; the player has no list of allowed modes
#[test]
fn given_mode_names_when_setting_then_stored_verbatim() {
    // Given
    let state = PlayerState::default();

    for mode in ["karaoke", "", "   ", "Loop"] {
        // When
        let transition = apply(&state, &Command::SetMode(mode.to_string())).unwrap();

        // Then
        assert_eq!(transition.state.mode(), mode);
        assert!(transition.applied());
    }
}

/// WHAT: Unknown changes nothing and reports no effect
/// WHY: Unmapped gestures must be harmless and visible as such
#[test]
fn given_unknown_command_when_applying_then_state_unchanged_and_no_effect() {
    // Given: A non-default state
    let state = after(&PlayerState::default(), &[Command::Play, Command::SetVolume(80)]);

    // When: Applying Unknown
    let transition = apply(&state, &Command::Unknown).unwrap();

    // Then: No effect
    assert_eq!(transition.state, state);
    assert_eq!(transition.effect, Effect::NoEffect);
    assert!(!transition.applied());
}

/// WHAT: Gesture-only commands follow their documented effects
/// WHY: Each gesture must drive a predictable change
#[test]
fn given_gesture_commands_when_applying_then_documented_effects() {
    // Given
    let start = after(&PlayerState::default(), &[Command::Seek(12_000)]);

    // When/Then: Play and Pause set the flag explicitly
    let playing = apply(&start, &Command::Play).unwrap().state;
    assert!(playing.is_playing());
    assert!(apply(&playing, &Command::Play).unwrap().state.is_playing());
    assert!(!apply(&playing, &Command::Pause).unwrap().state.is_playing());
    assert!(!apply(&playing, &Command::Exit).unwrap().state.is_playing());

    // Steps move by a fixed amount
    assert_eq!(
        i64::from(apply(&start, &Command::VolumeUp).unwrap().state.volume()),
        50 + VOLUME_STEP
    );
    assert_eq!(
        i64::from(apply(&start, &Command::VolumeDown).unwrap().state.volume()),
        50 - VOLUME_STEP
    );
    assert_eq!(
        i64::from(apply(&start, &Command::BrightnessUp).unwrap().state.brightness()),
        50 + BRIGHTNESS_STEP
    );
    assert_eq!(
        i64::from(apply(&start, &Command::BrightnessDown).unwrap().state.brightness()),
        50 - BRIGHTNESS_STEP
    );

    // Mute only ever sets
    let muted = apply(&start, &Command::Mute).unwrap().state;
    assert!(muted.is_muted());
    assert!(apply(&muted, &Command::Mute).unwrap().state.is_muted());

    // Every switch resets the position and keeps the video name
    for switch in [
        Command::NextVideo,
        Command::PreviousVideo,
        Command::SwitchVideo(Direction::Next),
        Command::SwitchVideo(Direction::Previous),
    ] {
        let next = apply(&start, &switch).unwrap().state;
        assert_eq!(next.current_time(), 0, "{}", switch);
        assert_eq!(next.current_video(), start.current_video());
    }
}

/// WHAT: Step commands saturate at the bounds
/// WHY: Repeated gestures must not wrap around
#[test]
fn given_levels_at_bounds_when_stepping_then_saturated() {
    // Given: Levels at the maximum and minimum
    let high = after(
        &PlayerState::default(),
        &[Command::SetVolume(100), Command::SetBrightness(100)],
    );
    let low = after(
        &PlayerState::default(),
        &[Command::SetVolume(0), Command::SetBrightness(0)],
    );

    // When/Then
    assert_eq!(apply(&high, &Command::VolumeUp).unwrap().state.volume(), 100);
    assert_eq!(apply(&high, &Command::BrightnessUp).unwrap().state.brightness(), 100);
    assert_eq!(apply(&low, &Command::VolumeDown).unwrap().state.volume(), 0);
    assert_eq!(apply(&low, &Command::BrightnessDown).unwrap().state.brightness(), 0);
}

/// WHAT: ModeToggle cycles the built-in modes and resets custom ones
/// WHY: The toggle gesture must always land on a known mode
#[test]
fn given_modes_when_toggling_then_cycle_followed() {
    // Given: The default mode
    let mut state = PlayerState::default();

    // When/Then: A full cycle returns to the start
    for expected in PLAYBACK_MODES.iter().cycle().skip(1).take(PLAYBACK_MODES.len()) {
        state = apply(&state, &Command::ModeToggle).unwrap().state;
        assert_eq!(state.mode(), *expected);
    }
    assert_eq!(state.mode(), "normal");

    // And a custom mode goes back to normal
    let custom = after(&state, &[Command::SetMode("karaoke".to_string())]);
    assert_eq!(apply(&custom, &Command::ModeToggle).unwrap().state.mode(), "normal");
}

/// WHAT: Bounds hold after a long mixed command sequence
/// WHY: Invariants must survive any valid sequence, not just single steps
#[test]
fn given_mixed_command_sequence_when_applied_then_levels_stay_in_bounds() {
    // Given: A deterministic mix of level-changing commands
    let commands = [
        Command::VolumeUp,
        Command::SetVolume(97),
        Command::VolumeUp,
        Command::BrightnessDown,
        Command::SetBrightness(3),
        Command::BrightnessDown,
        Command::SetVolume(-40),
        Command::VolumeDown,
        Command::BrightnessUp,
        Command::Seek(-1),
        Command::Unknown,
    ];

    let mut state = PlayerState::default();
    for i in 0..500usize {
        // When: Applying commands in a rotating order
        let command = &commands[(i * 7) % commands.len()];
        state = apply(&state, command).unwrap().state;

        // Then: Every intermediate state is within bounds
        assert!(state.volume() <= 100);
        assert!(state.brightness() <= 100);
        assert!(state.playback_speed() > 0.0);
    }
}

/// WHAT: Scenario from the control API contract
/// WHY: Documents the end-to-end clamping and toggling behavior
#[test]
fn given_default_state_when_clamping_and_muting_then_all_changes_visible() {
    // Given
    let state = PlayerState::default();

    // When
    let state = apply(&state, &Command::SetVolume(150)).unwrap().state;
    assert_eq!(state.volume(), 100);
    let state = apply(&state, &Command::SetVolume(-10)).unwrap().state;
    assert_eq!(state.volume(), 0);
    let state = apply(&state, &Command::ToggleMute).unwrap().state;

    // Then
    assert_eq!(state.volume(), 0);
    assert!(state.is_muted());
}

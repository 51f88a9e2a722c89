//! Player state machine.
//!
//! [`apply`] is pure: it validates the command against the current state and
//! returns the next state without touching the input. A rejected command
//! produces an error and no state at all, so callers can never observe a
//! partially applied transition.

use crate::{
    CoreError, CoreResult,
    command::Command,
    player::{LEVEL_MAX, PlayerState},
};

use std::panic::Location;

use error_location::ErrorLocation;

/// Volume change for one `VolumeUp`/`VolumeDown`.
pub const VOLUME_STEP: i64 = 10;

/// Brightness change for one `BrightnessUp`/`BrightnessDown`.
pub const BRIGHTNESS_STEP: i64 = 10;

/// Modes visited by `ModeToggle`, in order.
pub const PLAYBACK_MODES: [&str; 3] = ["normal", "loop", "shuffle"];

/// Whether a command changed anything the caller should know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The command was applied to the state.
    Applied,
    /// The command has no transition rule; the state is unchanged.
    NoEffect,
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State after the command.
    pub state: PlayerState,
    /// Whether the command had an effect.
    pub effect: Effect,
}

impl Transition {
    /// `true` unless the command was a no-op such as [`Command::Unknown`].
    pub fn applied(&self) -> bool {
        self.effect == Effect::Applied
    }
}

/// Compute the state that results from applying `command` to `state`.
///
/// # Errors
///
/// `InvalidParameter` when `SetSpeed` is not a positive finite number.
/// `state` is left as it was.
#[track_caller]
pub fn apply(state: &PlayerState, command: &Command) -> CoreResult<Transition> {
    validate(command)?;

    let mut next = state.clone();

    match command {
        Command::Play => next.is_playing = true,
        Command::Pause | Command::Exit => next.is_playing = false,
        Command::TogglePlay => next.is_playing = !next.is_playing,
        Command::VolumeUp => next.volume = step_level(next.volume, VOLUME_STEP),
        Command::VolumeDown => next.volume = step_level(next.volume, -VOLUME_STEP),
        Command::SetVolume(v) => next.volume = clamp_level(*v),
        Command::Mute => next.is_muted = true,
        Command::ToggleMute => next.is_muted = !next.is_muted,
        Command::ToggleFullscreen => next.is_fullscreen = !next.is_fullscreen,
        // Picking the actual source is up to the client; only the position resets.
        Command::NextVideo | Command::PreviousVideo | Command::SwitchVideo(_) => {
            next.current_time = 0
        }
        Command::BrightnessUp => next.brightness = step_level(next.brightness, BRIGHTNESS_STEP),
        Command::BrightnessDown => {
            next.brightness = step_level(next.brightness, -BRIGHTNESS_STEP)
        }
        Command::SetBrightness(v) => next.brightness = clamp_level(*v),
        Command::ModeToggle => next.mode = next_mode(&next.mode).to_string(),
        Command::SetMode(mode) => next.mode = mode.clone(),
        Command::ToggleProgressBar => next.progress_visible = !next.progress_visible,
        Command::SetSpeed(v) => next.playback_speed = *v,
        Command::Seek(offset) => {
            next.current_time = next.current_time.saturating_add_signed(*offset)
        }
        Command::Unknown => {
            return Ok(Transition {
                state: next,
                effect: Effect::NoEffect,
            });
        }
    }

    Ok(Transition {
        state: next,
        effect: Effect::Applied,
    })
}

#[track_caller]
fn validate(command: &Command) -> CoreResult<()> {
    match command {
        Command::SetSpeed(v) if !v.is_finite() || *v <= 0.0 => Err(CoreError::InvalidParameter {
            reason: format!("playback speed must be a positive number, got {}", v),
            location: ErrorLocation::from(Location::caller()),
        }),
        _ => Ok(()),
    }
}

fn clamp_level(value: i64) -> u8 {
    // Clamped into 0..=100 first, so the cast cannot truncate.
    value.clamp(0, i64::from(LEVEL_MAX)) as u8
}

fn step_level(current: u8, delta: i64) -> u8 {
    clamp_level(i64::from(current).saturating_add(delta))
}

fn next_mode(current: &str) -> &'static str {
    match PLAYBACK_MODES.iter().position(|m| *m == current) {
        Some(i) => PLAYBACK_MODES[(i + 1) % PLAYBACK_MODES.len()],
        None => PLAYBACK_MODES[0],
    }
}

use crate::{CoreError, CoreResult, command::Direction};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

/// A playback command understood by the player state machine.
///
/// Gesture recognition only ever produces the parameterless variants; the
/// parameterized ones arrive through the control API.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start playback.
    Play,
    /// Pause playback.
    Pause,
    /// Flip between playing and paused.
    TogglePlay,
    /// Raise the volume by one step.
    VolumeUp,
    /// Lower the volume by one step.
    VolumeDown,
    /// Set the volume, clamped to 0..=100.
    SetVolume(i64),
    /// Mute audio.
    Mute,
    /// Flip the mute flag.
    ToggleMute,
    /// Flip the fullscreen flag.
    ToggleFullscreen,
    /// Switch to the next video.
    NextVideo,
    /// Switch to the previous video.
    PreviousVideo,
    /// Switch video in the given direction.
    SwitchVideo(Direction),
    /// Stop playback. The process keeps running.
    Exit,
    /// Raise the brightness by one step.
    BrightnessUp,
    /// Lower the brightness by one step.
    BrightnessDown,
    /// Set the brightness, clamped to 0..=100.
    SetBrightness(i64),
    /// Cycle through the built-in playback modes.
    ModeToggle,
    /// Set an explicit playback mode.
    SetMode(String),
    /// Flip progress bar visibility.
    ToggleProgressBar,
    /// Set the playback speed. Must be positive.
    SetSpeed(f64),
    /// Move the playback position by a signed offset in milliseconds.
    Seek(i64),
    /// Gesture with no assigned command.
    Unknown,
}

#[derive(Deserialize)]
struct SpeedParams {
    #[serde(alias = "speed")]
    value: f64,
}

#[derive(Deserialize)]
struct VolumeParams {
    #[serde(alias = "volume")]
    value: i64,
}

#[derive(Deserialize)]
struct BrightnessParams {
    #[serde(alias = "brightness")]
    value: i64,
}

#[derive(Deserialize)]
struct SeekParams {
    #[serde(alias = "value", alias = "offset_ms")]
    offset: i64,
}

#[derive(Deserialize)]
struct ModeParams {
    #[serde(alias = "value", alias = "name")]
    mode: String,
}

#[derive(Deserialize)]
struct SwitchParams {
    #[serde(alias = "value")]
    direction: Direction,
}

impl Command {
    /// Wire name of the command, as accepted by [`Command::from_control`].
    pub fn name(&self) -> &'static str {
        match self {
            Command::Play => "Play",
            Command::Pause => "Pause",
            Command::TogglePlay => "TogglePlay",
            Command::VolumeUp => "VolumeUp",
            Command::VolumeDown => "VolumeDown",
            Command::SetVolume(_) => "SetVolume",
            Command::Mute => "Mute",
            Command::ToggleMute => "ToggleMute",
            Command::ToggleFullscreen => "ToggleFullscreen",
            Command::NextVideo => "NextVideo",
            Command::PreviousVideo => "PreviousVideo",
            Command::SwitchVideo(_) => "SwitchVideo",
            Command::Exit => "Exit",
            Command::BrightnessUp => "BrightnessUp",
            Command::BrightnessDown => "BrightnessDown",
            Command::SetBrightness(_) => "SetBrightness",
            Command::ModeToggle => "ModeToggle",
            Command::SetMode(_) => "SetMode",
            Command::ToggleProgressBar => "ToggleProgressBar",
            Command::SetSpeed(_) => "SetSpeed",
            Command::Seek(_) => "Seek",
            Command::Unknown => "Unknown",
        }
    }

    /// Build a command from a control request `name` and its JSON `params`.
    ///
    /// Parameterless commands ignore `params`. `Unknown` is not a valid
    /// control command; it only exists as the fallback for unmapped gestures.
    ///
    /// # Errors
    ///
    /// `UnknownCommand` for names outside the command set, `InvalidParameter`
    /// when `params` is missing a field or has the wrong type. Domain checks
    /// (e.g. positive speed) happen when the command is applied.
    #[track_caller]
    pub fn from_control(name: &str, params: &Value) -> CoreResult<Self> {
        let command = match name {
            "Play" => Command::Play,
            "Pause" => Command::Pause,
            "TogglePlay" => Command::TogglePlay,
            "VolumeUp" => Command::VolumeUp,
            "VolumeDown" => Command::VolumeDown,
            "SetVolume" => Command::SetVolume(parse_params::<VolumeParams>(name, params)?.value),
            "Mute" => Command::Mute,
            "ToggleMute" => Command::ToggleMute,
            "ToggleFullscreen" => Command::ToggleFullscreen,
            "NextVideo" => Command::NextVideo,
            "PreviousVideo" => Command::PreviousVideo,
            "SwitchVideo" => {
                Command::SwitchVideo(parse_params::<SwitchParams>(name, params)?.direction)
            }
            "Exit" => Command::Exit,
            "BrightnessUp" => Command::BrightnessUp,
            "BrightnessDown" => Command::BrightnessDown,
            "SetBrightness" => {
                Command::SetBrightness(parse_params::<BrightnessParams>(name, params)?.value)
            }
            "ModeToggle" => Command::ModeToggle,
            "SetMode" => Command::SetMode(parse_params::<ModeParams>(name, params)?.mode),
            "ToggleProgressBar" => Command::ToggleProgressBar,
            "SetSpeed" => Command::SetSpeed(parse_params::<SpeedParams>(name, params)?.value),
            "Seek" => Command::Seek(parse_params::<SeekParams>(name, params)?.offset),
            _ => {
                return Err(CoreError::UnknownCommand {
                    name: name.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        debug!(command = %command, "Control command parsed");

        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetVolume(v) | Command::SetBrightness(v) => write!(f, "{}({})", self.name(), v),
            Command::Seek(offset) => write!(f, "Seek({})", offset),
            Command::SetSpeed(v) => write!(f, "SetSpeed({})", v),
            Command::SetMode(mode) => write!(f, "SetMode({:?})", mode),
            Command::SwitchVideo(direction) => write!(f, "SwitchVideo({})", direction),
            _ => f.write_str(self.name()),
        }
    }
}

#[track_caller]
fn parse_params<T: DeserializeOwned>(name: &str, params: &Value) -> CoreResult<T> {
    T::deserialize(params).map_err(|e| CoreError::InvalidParameter {
        reason: format!("{} params: {}", name, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

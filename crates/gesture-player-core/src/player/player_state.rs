use serde::Serialize;

/// Volume and brightness upper bound.
pub const LEVEL_MAX: u8 = 100;

/// Video loaded at startup unless configured otherwise.
pub const DEFAULT_VIDEO: &str = "sample1.mp4";

/// Playback mode at startup.
pub const DEFAULT_MODE: &str = "normal";

/// Snapshot of the media player.
///
/// Fields are private so a state can only be produced by [`PlayerState::default`],
/// [`PlayerState::with_video`] or a transition, which keeps every instance
/// within bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerState {
    pub(crate) is_playing: bool,
    pub(crate) volume: u8,
    pub(crate) is_muted: bool,
    pub(crate) is_fullscreen: bool,
    pub(crate) brightness: u8,
    pub(crate) playback_speed: f64,
    pub(crate) current_video: String,
    /// Playback position in milliseconds.
    pub(crate) current_time: u64,
    pub(crate) mode: String,
    pub(crate) progress_visible: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            is_playing: false,
            volume: 50,
            is_muted: false,
            is_fullscreen: false,
            brightness: 50,
            playback_speed: 1.0,
            current_video: DEFAULT_VIDEO.to_string(),
            current_time: 0,
            mode: DEFAULT_MODE.to_string(),
            progress_visible: false,
        }
    }
}

impl PlayerState {
    /// Default state with a different initial video.
    pub fn with_video(video: impl Into<String>) -> Self {
        Self {
            current_video: video.into(),
            ..Self::default()
        }
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Volume in 0..=100.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Whether audio is muted.
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    /// Whether the player is fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Brightness in 0..=100.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Playback speed multiplier, always positive.
    pub fn playback_speed(&self) -> f64 {
        self.playback_speed
    }

    /// File name of the current video.
    pub fn current_video(&self) -> &str {
        &self.current_video
    }

    /// Playback position in milliseconds.
    pub fn current_time(&self) -> u64 {
        self.current_time
    }

    /// Playback mode name.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Whether the progress bar is shown.
    pub fn progress_visible(&self) -> bool {
        self.progress_visible
    }
}

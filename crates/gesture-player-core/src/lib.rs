//! Gesture Player Core Library
//!
//! Maps recognized hand gestures to playback commands and applies them to a
//! shared media-player state through a deterministic state machine.
//!
//! # Example
//!
//! ```
//! use gesture_player_core::{
//!     Command, CoreResult, PlayerStore, map_gesture_to_command,
//! };
//!
//! fn main() -> CoreResult<()> {
//!     let store = PlayerStore::default();
//!
//!     store.apply_command(&Command::SetVolume(150))?;
//!     let transition = store.apply_command(&map_gesture_to_command("0"))?;
//!
//!     assert!(transition.state.is_playing());
//!     assert_eq!(store.snapshot().volume(), 100);
//!     Ok(())
//! }
//! ```

mod command;
mod error;
mod gesture;
mod player;

pub use {
    command::{Command, Direction, GESTURE_LABELS, map_gesture_to_command},
    error::{CoreError, ErrorKind, Result as CoreResult},
    gesture::{
        BoundingBox, DEFAULT_CONFIDENCE_THRESHOLD, DetectionModel, GESTURE_CLASS_NAMES,
        GestureClassifier, GestureDetection, ModelError, RawDetection, StaticModel,
        ThresholdClassifier, class_name,
    },
    player::{
        BRIGHTNESS_STEP, DEFAULT_MODE, DEFAULT_VIDEO, Effect, LEVEL_MAX, PLAYBACK_MODES,
        PlayerState, PlayerStore, Transition, VOLUME_STEP, apply,
    },
};

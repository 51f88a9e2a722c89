mod player_state;
mod store;
mod transition;

pub use {
    player_state::{DEFAULT_MODE, DEFAULT_VIDEO, LEVEL_MAX, PlayerState},
    store::PlayerStore,
    transition::{BRIGHTNESS_STEP, Effect, PLAYBACK_MODES, Transition, VOLUME_STEP, apply},
};

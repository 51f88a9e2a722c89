#[allow(clippy::module_inception)]
mod command;
mod direction;
mod gesture_map;

pub use {
    command::Command,
    direction::Direction,
    gesture_map::{GESTURE_LABELS, map_gesture_to_command},
};

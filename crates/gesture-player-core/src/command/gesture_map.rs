use crate::command::Command;

/// Gesture labels that have a command bound to them, in table order.
pub const GESTURE_LABELS: [&str; 13] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Resolve a gesture label to the command bound to it.
///
/// Total over all strings: anything outside [`GESTURE_LABELS`] (including
/// the empty string and detector classes with no binding) is
/// [`Command::Unknown`].
pub fn map_gesture_to_command(label: &str) -> Command {
    match label {
        "0" => Command::Play,
        "1" => Command::Pause,
        "2" => Command::VolumeUp,
        "3" => Command::VolumeDown,
        "4" => Command::Mute,
        "5" => Command::ToggleFullscreen,
        "6" => Command::NextVideo,
        "7" => Command::PreviousVideo,
        "8" => Command::Exit,
        "9" => Command::BrightnessUp,
        "10" => Command::BrightnessDown,
        "11" => Command::ModeToggle,
        "12" => Command::ToggleProgressBar,
        _ => Command::Unknown,
    }
}

use std::borrow::Cow;

/// Class names reported by the hand-gesture detector, indexed by class id.
pub const GESTURE_CLASS_NAMES: [&str; 34] = [
    "grabbing",
    "grip",
    "holy",
    "point",
    "take_photo",
    "three3",
    "timeout",
    "xsign",
    "heart2",
    "heart",
    "pinkie",
    "mid_finger",
    "call",
    "dislike",
    "fist",
    "four",
    "like",
    "mute",
    "ok",
    "one",
    "palm",
    "peace",
    "peace_inv.",
    "rock",
    "stop",
    "stop_inv.",
    "three",
    "three2",
    "two_up",
    "two_up_inv.",
    "gun",
    "thumb_index",
    "thumb_index2",
    "no_gesture",
];

/// Human-readable name for a detector class, `class_<id>` when out of table.
pub fn class_name(class_id: u32) -> Cow<'static, str> {
    usize::try_from(class_id)
        .ok()
        .and_then(|i| GESTURE_CLASS_NAMES.get(i))
        .map(|name| Cow::Borrowed(*name))
        .unwrap_or_else(|| Cow::Owned(format!("class_{}", class_id)))
}

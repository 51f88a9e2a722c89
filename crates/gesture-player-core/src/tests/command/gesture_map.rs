use crate::{Command, GESTURE_LABELS, map_gesture_to_command};

/// WHAT: Every bound gesture label resolves to its documented command
/// WHY: The gesture table is the contract between the detector and the player
#[test]
fn given_known_labels_when_mapping_then_documented_commands_returned() {
    // Given: The documented gesture table
    let expected = [
        ("0", Command::Play),
        ("1", Command::Pause),
        ("2", Command::VolumeUp),
        ("3", Command::VolumeDown),
        ("4", Command::Mute),
        ("5", Command::ToggleFullscreen),
        ("6", Command::NextVideo),
        ("7", Command::PreviousVideo),
        ("8", Command::Exit),
        ("9", Command::BrightnessUp),
        ("10", Command::BrightnessDown),
        ("11", Command::ModeToggle),
        ("12", Command::ToggleProgressBar),
    ];

    for (label, command) in expected {
        // When: Mapping the label
        let mapped = map_gesture_to_command(label);

        // Then: The bound command is returned
        assert_eq!(mapped, command, "label {:?}", label);
    }
}

/// WHAT: Every entry of GESTURE_LABELS has a real binding
/// WHY: The exported label list must not drift from the match table
#[test]
fn given_exported_labels_when_mapping_then_none_are_unknown() {
    // Given/When/Then: No listed label falls through to Unknown
    for label in GESTURE_LABELS {
        assert_ne!(map_gesture_to_command(label), Command::Unknown, "label {:?}", label);
    }
}

/// WHAT: Labels outside the table resolve to Unknown
/// WHY: The mapper is total; detector classes without a binding must not fail
#[test]
fn given_unmapped_labels_when_mapping_then_unknown_returned() {
    // Given: Empty, out-of-range, padded and named labels
    let labels = ["", "13", "24", "33", "-1", " 0", "0 ", "00", "stop", "Play"];

    for label in labels {
        // When: Mapping the label
        let mapped = map_gesture_to_command(label);

        // Then: Unknown is returned
        assert_eq!(mapped, Command::Unknown, "label {:?}", label);
    }
}

/// WHAT: Detector class ids above the table resolve to Unknown
/// WHY: The detector knows 34 classes but only 13 carry a command
#[test]
fn given_detector_class_ids_beyond_table_when_mapping_then_unknown_returned() {
    // Given/When/Then: Every class id from 13 to 33
    for class_id in 13..34u32 {
        assert_eq!(
            map_gesture_to_command(&class_id.to_string()),
            Command::Unknown
        );
    }
}

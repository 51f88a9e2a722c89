use gesture_player_core::{BoundingBox, Command, GestureDetection, PlayerState, Transition};

use serde::Serialize;

/// Response to one gesture recognition request.
#[derive(Debug, Clone, Serialize)]
pub struct Recognition {
    /// Detected gesture label, or None when nothing was confident enough.
    pub gesture: Option<String>,
    /// Detector class name for `gesture`.
    pub gesture_name: Option<String>,
    /// Detection confidence.
    pub confidence: Option<f32>,
    /// Where the hand was found.
    pub bounding_box: Option<BoundingBox>,
    /// Command the gesture resolved to.
    pub command: &'static str,
    /// Whether the command changed the player.
    pub applied: bool,
    /// Player state after the command.
    pub state: PlayerState,
}

impl Recognition {
    pub(crate) fn new(
        detection: Option<GestureDetection>,
        command: &Command,
        transition: Transition,
    ) -> Self {
        let applied = transition.applied();
        let (gesture, gesture_name, confidence, bounding_box) = match detection {
            Some(d) => (
                Some(d.label),
                Some(d.gesture_name),
                Some(d.confidence),
                d.bounding_box,
            ),
            None => (None, None, None, None),
        };

        Self {
            gesture,
            gesture_name,
            confidence,
            bounding_box,
            command: command.name(),
            applied,
            state: transition.state,
        }
    }
}

use serde::Serialize;

/// Pixel-space box around a detection, corners `(x1, y1)` and `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge.
    pub x2: i32,
    /// Bottom edge.
    pub y2: i32,
}

/// One detection as produced by a [`DetectionModel`](crate::DetectionModel).
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetection {
    /// Detector class id.
    pub class_id: u32,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f32,
    /// Where the hand was found, if the detector localizes.
    pub bounding_box: Option<BoundingBox>,
}

/// Gesture reported to the command mapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureDetection {
    /// Gesture label the command table is keyed on (the decimal class id).
    pub label: String,
    /// Human-readable class name.
    pub gesture_name: String,
    /// Confidence rounded to three decimals.
    pub confidence: f32,
    /// Where the hand was found, if known.
    pub bounding_box: Option<BoundingBox>,
}

mod classifier;
mod detection;
mod labels;
mod model;

pub use {
    classifier::{DEFAULT_CONFIDENCE_THRESHOLD, GestureClassifier, ThresholdClassifier},
    detection::{BoundingBox, GestureDetection, RawDetection},
    labels::{GESTURE_CLASS_NAMES, class_name},
    model::{DetectionModel, ModelError, StaticModel},
};

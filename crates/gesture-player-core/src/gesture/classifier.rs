use crate::{
    CoreError, CoreResult,
    gesture::{DetectionModel, GestureDetection, class_name},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Minimum confidence a detection must exceed to be reported.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Turns raw image bytes into at most one gesture.
///
/// This is the seam the service depends on; tests substitute their own
/// implementation so no model has to be loaded.
pub trait GestureClassifier: Send + Sync {
    /// Classify the gesture in an encoded image.
    ///
    /// Returns `Ok(None)` when no gesture is confident enough.
    ///
    /// # Errors
    ///
    /// `ImageDecode` when the bytes are not a supported image, `ModelFailed`
    /// when the detector itself fails.
    fn classify(&self, image_bytes: &[u8]) -> CoreResult<Option<GestureDetection>>;
}

/// Classifier that reports the first detection above a confidence threshold.
///
/// Detections are scanned in the order the model yields them; there is no
/// re-ranking by confidence.
pub struct ThresholdClassifier<M> {
    model: M,
    threshold: f32,
}

impl<M: DetectionModel> ThresholdClassifier<M> {
    /// Wraps `model` with [`DEFAULT_CONFIDENCE_THRESHOLD`].
    pub fn new(model: M) -> Self {
        Self::with_threshold(model, DEFAULT_CONFIDENCE_THRESHOLD)
    }

    /// Wraps `model` with a custom threshold.
    pub fn with_threshold(model: M, threshold: f32) -> Self {
        info!(threshold, "Gesture classifier initialized");

        Self { model, threshold }
    }

    /// Confidence a detection must exceed.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<M: DetectionModel> GestureClassifier for ThresholdClassifier<M> {
    #[track_caller]
    #[instrument(skip(self, image_bytes), fields(byte_len = image_bytes.len()))]
    fn classify(&self, image_bytes: &[u8]) -> CoreResult<Option<GestureDetection>> {
        let image = image::load_from_memory(image_bytes)
            .map_err(|e| CoreError::ImageDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_rgb8();

        let detections = self
            .model
            .detect(&image)
            .map_err(|e| CoreError::ModelFailed {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(
            width = image.width(),
            height = image.height(),
            detection_count = detections.len(),
            "Detector finished"
        );

        let detection = detections
            .into_iter()
            .find(|d| d.confidence > self.threshold)
            .map(|d| GestureDetection {
                label: d.class_id.to_string(),
                gesture_name: class_name(d.class_id).into_owned(),
                confidence: (d.confidence * 1000.0).round() / 1000.0,
                bounding_box: d.bounding_box,
            });

        match &detection {
            Some(d) => debug!(
                label = %d.label,
                gesture = %d.gesture_name,
                confidence = d.confidence,
                "Gesture detected"
            ),
            None => debug!("No gesture above threshold"),
        }

        Ok(detection)
    }
}

use crate::gesture::{BoundingBox, RawDetection};

use image::RgbImage;

/// Error type detection models report failures with.
pub type ModelError = Box<dyn std::error::Error + Send + Sync>;

/// An object detector that finds hand gestures in an image.
///
/// Implemented by the external vision model. Detections are returned in the
/// detector's own order, which [`ThresholdClassifier`](crate::ThresholdClassifier)
/// preserves.
pub trait DetectionModel: Send + Sync {
    /// Run detection on a decoded RGB image.
    fn detect(&self, image: &RgbImage) -> Result<Vec<RawDetection>, ModelError>;
}

/// Detector that reports the same result for every image.
///
/// Stands in for a real model when none is wired up.
#[derive(Debug, Clone, Default)]
pub struct StaticModel {
    detection: Option<RawDetection>,
}

impl StaticModel {
    /// Reports nothing for every image.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reports `class_id` at `confidence`, boxed around the whole image.
    pub fn fixed(class_id: u32, confidence: f32) -> Self {
        Self {
            detection: Some(RawDetection {
                class_id,
                confidence,
                bounding_box: None,
            }),
        }
    }
}

impl DetectionModel for StaticModel {
    fn detect(&self, image: &RgbImage) -> Result<Vec<RawDetection>, ModelError> {
        let (width, height) = image.dimensions();
        let bounding_box = BoundingBox {
            x1: 0,
            y1: 0,
            x2: i32::try_from(width).unwrap_or(i32::MAX),
            y2: i32::try_from(height).unwrap_or(i32::MAX),
        };

        Ok(self
            .detection
            .iter()
            .cloned()
            .map(|d| RawDetection {
                bounding_box: Some(bounding_box),
                ..d
            })
            .collect())
    }
}

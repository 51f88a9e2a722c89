use crate::{AppError, AppResult, Recognition, config::Config};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use gesture_player_core::{
    Command, GestureClassifier, GestureDetection, PlayerState, PlayerStore, StaticModel,
    ThresholdClassifier, map_gesture_to_command,
};
use serde_json::Value;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Shared application state handed to every request.
///
/// Cheap to clone; all clones share one player store and one classifier.
#[derive(Clone)]
pub struct App {
    pub(crate) store: Arc<PlayerStore>,
    pub(crate) classifier: Arc<dyn GestureClassifier>,
    pub(crate) classify_timeout: Duration,
}

impl App {
    /// Assemble an app from its parts.
    pub fn new(
        store: Arc<PlayerStore>,
        classifier: Arc<dyn GestureClassifier>,
        classify_timeout: Duration,
    ) -> Self {
        Self {
            store,
            classifier,
            classify_timeout,
        }
    }

    /// Build the app described by `config`, using the built-in static detector.
    pub fn from_config(config: &Config) -> Self {
        let classifier_cfg = &config.classifier;

        let model = match classifier_cfg.stub_class {
            Some(class_id) => StaticModel::fixed(class_id, classifier_cfg.stub_confidence),
            None => StaticModel::empty(),
        };

        if classifier_cfg.stub_class.is_none() {
            warn!("No gesture model configured; every image reports no gesture");
        }

        let classifier =
            ThresholdClassifier::with_threshold(model, classifier_cfg.confidence_threshold);
        let store = PlayerStore::new(PlayerState::with_video(
            config.player.initial_video.clone(),
        ));

        Self::new(
            Arc::new(store),
            Arc::new(classifier),
            classifier_cfg.timeout(),
        )
    }

    /// Current player state.
    pub fn player_state(&self) -> PlayerState {
        self.store.snapshot()
    }

    /// Apply a command and return the resulting state.
    #[track_caller]
    pub fn apply_command(&self, command: &Command) -> AppResult<PlayerState> {
        let transition = self.store.apply_command(command)?;
        Ok(transition.state)
    }

    /// Parse and apply a control command given by name and JSON params.
    #[track_caller]
    #[instrument(skip(self, params))]
    pub fn apply_control_command(&self, name: &str, params: &Value) -> AppResult<PlayerState> {
        let command = Command::from_control(name, params)?;
        self.apply_command(&command)
    }

    /// Classify an image, map the gesture to a command and apply it.
    ///
    /// Classification runs on the blocking pool without holding the store
    /// lock. If it does not finish within the configured timeout the request
    /// is treated as "no gesture" and nothing is applied.
    #[instrument(skip(self, image), fields(request_id = %Uuid::new_v4(), byte_len = image.len()))]
    pub async fn recognize_gesture(&self, image: Vec<u8>) -> AppResult<Recognition> {
        if image.is_empty() {
            return Err(AppError::InvalidInput {
                reason: "image payload is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let start = std::time::Instant::now();
        let detection = self.classify(image).await?;

        let command = match &detection {
            Some(d) => map_gesture_to_command(&d.label),
            None => Command::Unknown,
        };

        let transition = self.store.apply_command(&command)?;

        info!(
            gesture = detection.as_ref().map(|d| d.label.as_str()),
            command = %command,
            applied = transition.applied(),
            duration_ms = start.elapsed().as_millis(),
            "Gesture recognized"
        );

        Ok(Recognition::new(detection, &command, transition))
    }

    async fn classify(&self, image: Vec<u8>) -> AppResult<Option<GestureDetection>> {
        let classifier = Arc::clone(&self.classifier);
        let task = tokio::task::spawn_blocking(move || classifier.classify(&image));

        match tokio::time::timeout(self.classify_timeout, task).await {
            Ok(Ok(result)) => Ok(result?),
            Ok(Err(e)) => Err(AppError::Internal {
                reason: format!("Classifier task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(_) => {
                // The blocking task keeps running to completion; its result is dropped.
                warn!(
                    timeout_ms = self.classify_timeout.as_millis(),
                    "Classification timed out, treating as no gesture"
                );
                Ok(None)
            }
        }
    }
}

use crate::config::{default_confidence_threshold, default_stub_confidence, default_timeout_ms};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Gesture classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum confidence a detection must exceed.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Upper bound on one classification, in milliseconds. Slower requests
    /// are treated as "no gesture".
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Class id the built-in static detector reports for every image
    /// (None = report nothing).
    #[serde(default)]
    pub stub_class: Option<u32>,

    /// Confidence the static detector reports.
    #[serde(default = "default_stub_confidence")]
    pub stub_confidence: f32,
}

impl ClassifierConfig {
    /// Classification timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            timeout_ms: default_timeout_ms(),
            stub_class: None,
            stub_confidence: default_stub_confidence(),
        }
    }
}

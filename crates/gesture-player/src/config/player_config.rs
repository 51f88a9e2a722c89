use crate::config::default_initial_video;

use serde::{Deserialize, Serialize};

/// Player startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Video loaded when the process starts.
    #[serde(default = "default_initial_video")]
    pub initial_video: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_video: default_initial_video(),
        }
    }
}

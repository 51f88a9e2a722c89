mod classifier_config;
#[allow(clippy::module_inception)]
mod config;
mod logging_config;
mod player_config;
mod server_config;

pub(crate) use {
    classifier_config::ClassifierConfig, config::Config, logging_config::LoggingConfig,
    player_config::PlayerConfig, server_config::ServerConfig,
};

pub(crate) const CONFIG_PATH_ENV: &str = "GESTURE_PLAYER_CONFIG";
pub(crate) const DEFAULT_HOST: &str = "127.0.0.1";
pub(crate) const DEFAULT_PORT: u16 = 5000;
pub(crate) const DEFAULT_ENABLE_CORS: bool = true;
pub(crate) const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 2000;
pub(crate) const DEFAULT_STUB_CONFIDENCE: f32 = 0.9;
pub(crate) const DEFAULT_LOG_FILTER: &str = "gesture_player=debug,gesture_player_core=debug";

pub(crate) fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

pub(crate) fn default_port() -> u16 {
    DEFAULT_PORT
}

pub(crate) fn default_enable_cors() -> bool {
    DEFAULT_ENABLE_CORS
}

pub(crate) fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

pub(crate) fn default_confidence_threshold() -> f32 {
    gesture_player_core::DEFAULT_CONFIDENCE_THRESHOLD
}

pub(crate) fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

pub(crate) fn default_stub_confidence() -> f32 {
    DEFAULT_STUB_CONFIDENCE
}

pub(crate) fn default_initial_video() -> String {
    gesture_player_core::DEFAULT_VIDEO.to_string()
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

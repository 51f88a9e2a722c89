//! Gesture Player: hand-gesture driven media player control service.

mod app;
mod config;
mod error;
mod logging_setup;
mod recognition;
mod server;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    recognition::Recognition,
};

use crate::{config::Config, logging_setup::init_tracing};

use tracing::{error, info};

/// Application entry point.
#[tokio::main]
async fn main() {
    let config = Config::load();

    // Logging settings come from the config, so the subscriber starts after
    // loading; a broken config is still reported with defaults.
    init_tracing(&config.as_ref().map(|c| c.logging.clone()).unwrap_or_default());

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), "Gesture player starting");

    let app = App::from_config(&config);

    if let Err(e) = server::serve(app, &config).await {
        error!(error = ?e, "Server error");
        std::process::exit(1);
    }
}

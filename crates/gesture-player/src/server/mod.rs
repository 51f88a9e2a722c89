//! Axum HTTP boundary.

mod gesture_routes;
mod video_routes;

use crate::{App, AppResult, config::Config};

use axum::{Router, extract::DefaultBodyLimit};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Build the API router with all routes mounted.
pub(crate) fn build_router(app: App, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/gesture", gesture_routes::router())
        .nest("/api/video", video_routes::router())
        .layer(DefaultBodyLimit::max(config.server.max_upload_bytes))
        .with_state(app);

    if config.server.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Serve the API until Ctrl-C.
pub(crate) async fn serve(app: App, config: &Config) -> AppResult<()> {
    let address = config.bind_address();
    let router = build_router(app, config);

    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, "Gesture player listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gesture player shut down");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => error!(error = ?e, "Failed to listen for Ctrl-C"),
    }
}

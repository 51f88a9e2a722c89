use gesture_player_core::{CoreError, ErrorKind};

use std::{panic::Location, result::Result as StdResult};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Application-level errors for the gesture-player binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from gesture-player-core.
    #[error("Core error: {source} {location}")]
    Core {
        /// The underlying core error.
        #[source]
        source: CoreError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Request payload missing or malformed.
    #[error("Invalid input: {reason} {location}")]
    InvalidInput {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Unexpected failure, e.g. a classifier task that panicked.
    #[error("Internal error: {reason} {location}")]
    Internal {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem or socket operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

impl AppError {
    /// Caller-facing error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Core { source, .. } => source.kind(),
            AppError::InvalidInput { .. } => ErrorKind::InvalidInput,
            AppError::Internal { .. } | AppError::ConfigError { .. } | AppError::IoError { .. } => {
                ErrorKind::InternalError
            }
        }
    }

    /// Message returned to the caller. Source locations stay in the logs.
    pub fn message(&self) -> String {
        match self {
            AppError::Core { source, .. } => source.message(),
            AppError::InvalidInput { reason, .. } => reason.clone(),
            AppError::Internal { .. } | AppError::ConfigError { .. } | AppError::IoError { .. } => {
                "internal server error".to_string()
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::ClassificationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        let body = json!({
            "error": {
                "kind": self.kind(),
                "message": self.message(),
            }
        });

        (status, Json(body)).into_response()
    }
}

// Manual From<CoreError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<CoreError> for AppError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        AppError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;

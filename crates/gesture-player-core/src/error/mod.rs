use std::fmt;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Caller-facing error taxonomy.
///
/// Every failure that leaves the service is reported as exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Missing or malformed request payload, or an out-of-domain parameter.
    InvalidInput,
    /// Image could not be decoded, or the detector failed.
    ClassificationError,
    /// Unexpected failure inside the service.
    InternalError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::ClassificationError => "ClassificationError",
            ErrorKind::InternalError => "InternalError",
        };
        f.write_str(name)
    }
}

/// Player core errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A command parameter failed its domain check.
    #[error("Invalid parameter: {reason} {location}")]
    InvalidParameter {
        /// Description of the rejected parameter.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Control command name is not part of the command set.
    #[error("Unknown command: {name:?} {location}")]
    UnknownCommand {
        /// The name that was supplied.
        name: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Image bytes could not be decoded.
    #[error("Image decode failed: {source} {location}")]
    ImageDecode {
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The detection model failed on a decoded image.
    #[error("Gesture model failed: {source} {location}")]
    ModelFailed {
        /// Underlying error from the detection model.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Which caller-facing kind this error is reported as.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidParameter { .. } | CoreError::UnknownCommand { .. } => {
                ErrorKind::InvalidInput
            }
            CoreError::ImageDecode { .. } | CoreError::ModelFailed { .. } => {
                ErrorKind::ClassificationError
            }
        }
    }

    /// Message safe to show a caller: the reason without the source location.
    pub fn message(&self) -> String {
        match self {
            CoreError::InvalidParameter { reason, .. } => reason.clone(),
            CoreError::UnknownCommand { name, .. } => format!("unknown command {:?}", name),
            CoreError::ImageDecode { source, .. } => {
                format!("image could not be decoded: {}", source)
            }
            CoreError::ModelFailed { source, .. } => format!("gesture model failed: {}", source),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

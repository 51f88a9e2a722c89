use crate::{App, AppError, AppResult, Recognition};

use std::panic::Location;

use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartRejection},
    routing::post,
};
use error_location::ErrorLocation;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "file";

pub(super) fn router() -> Router<App> {
    Router::new().route("/predict", post(predict))
}

/// POST /api/gesture/predict - recognize the gesture in an uploaded image
async fn predict(
    State(app): State<App>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<Recognition>> {
    let image = read_image(multipart).await?;
    let recognition = app.recognize_gesture(image).await?;
    Ok(Json(recognition))
}

#[track_caller]
fn invalid(reason: String) -> AppError {
    AppError::InvalidInput {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}

async fn read_image(multipart: Result<Multipart, MultipartRejection>) -> AppResult<Vec<u8>> {
    let mut multipart =
        multipart.map_err(|e| invalid(format!("expected multipart/form-data upload: {}", e)))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| invalid(format!("malformed multipart body: {}", e)))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| invalid(format!("failed to read image field: {}", e)))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(invalid(format!("missing {:?} field with the image", IMAGE_FIELD)))
}

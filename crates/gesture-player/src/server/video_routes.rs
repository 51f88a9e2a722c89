use crate::{App, AppError, AppResult};

use std::panic::Location;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use error_location::ErrorLocation;
use gesture_player_core::{Command, Direction, PlayerState};
use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/video/command`.
#[derive(Debug, Deserialize)]
struct ControlRequest {
    name: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Deserialize)]
struct SpeedBody {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct VolumeBody {
    volume: i64,
}

#[derive(Debug, Deserialize)]
struct BrightnessBody {
    brightness: i64,
}

#[derive(Debug, Deserialize)]
struct SwitchVideoBody {
    direction: Direction,
}

#[derive(Debug, Deserialize)]
struct SeekBody {
    offset: i64,
}

#[derive(Debug, Deserialize)]
struct ModeBody {
    mode: String,
}

pub(super) fn router() -> Router<App> {
    Router::new()
        .route("/state", get(get_state))
        .route("/command", post(apply_control_command))
        .route("/toggle_play", post(toggle_play))
        .route("/speed", post(set_speed))
        .route("/volume", post(set_volume))
        .route("/toggle_mute", post(toggle_mute))
        .route("/fullscreen", post(toggle_fullscreen))
        .route("/brightness", post(set_brightness))
        .route("/switch_video", post(switch_video))
        .route("/exit", post(exit_player))
        .route("/seek", post(seek))
        .route("/mode", post(set_mode))
        .route("/progress", post(toggle_progress))
}

/// Unwrap a JSON body, turning axum's rejection into a structured error.
#[track_caller]
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::InvalidInput {
            reason: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn run(app: &App, command: Command) -> AppResult<Json<PlayerState>> {
    app.apply_command(&command).map(Json)
}

/// GET /api/video/state - current player state
async fn get_state(State(app): State<App>) -> Json<PlayerState> {
    Json(app.player_state())
}

/// POST /api/video/command - apply any control command by name
async fn apply_control_command(
    State(app): State<App>,
    payload: Result<Json<ControlRequest>, JsonRejection>,
) -> AppResult<Json<PlayerState>> {
    let request = body(payload)?;
    app.apply_control_command(&request.name, &request.params)
        .map(Json)
}

/// POST /api/video/toggle_play - flip play/pause
async fn toggle_play(State(app): State<App>) -> AppResult<Json<PlayerState>> {
    run(&app, Command::TogglePlay)
}

/// POST /api/video/speed - set playback speed
async fn set_speed(
    State(app): State<App>,
    payload: Result<Json<SpeedBody>, JsonRejection>,
) -> AppResult<Json<PlayerState>> {
    run(&app, Command::SetSpeed(body(payload)?.speed))
}

/// POST /api/video/volume - set volume
async fn set_volume(
    State(app): State<App>,
    payload: Result<Json<VolumeBody>, JsonRejection>,
) -> AppResult<Json<PlayerState>> {
    run(&app, Command::SetVolume(body(payload)?.volume))
}

/// POST /api/video/toggle_mute - flip mute
async fn toggle_mute(State(app): State<App>) -> AppResult<Json<PlayerState>> {
    run(&app, Command::ToggleMute)
}

/// POST /api/video/fullscreen - flip fullscreen
async fn toggle_fullscreen(State(app): State<App>) -> AppResult<Json<PlayerState>> {
    run(&app, Command::ToggleFullscreen)
}

/// POST /api/video/brightness - set brightness
async fn set_brightness(
    State(app): State<App>,
    payload: Result<Json<BrightnessBody>, JsonRejection>,
) -> AppResult<Json<PlayerState>> {
    run(&app, Command::SetBrightness(body(payload)?.brightness))
}

/// POST /api/video/switch_video - move to the next or previous video
async fn switch_video(
    State(app): State<App>,
    payload: Result<Json<SwitchVideoBody>, JsonRejection>,
) -> AppResult<Json<PlayerState>> {
    run(&app, Command::SwitchVideo(body(payload)?.direction))
}

/// POST /api/video/exit - stop playback
async fn exit_player(State(app): State<App>) -> AppResult<Json<PlayerState>> {
    run(&app, Command::Exit)
}

/// POST /api/video/seek - move the playback position
async fn seek(
    State(app): State<App>,
    payload: Result<Json<SeekBody>, JsonRejection>,
) -> AppResult<Json<PlayerState>> {
    run(&app, Command::Seek(body(payload)?.offset))
}

/// POST /api/video/mode - set playback mode
async fn set_mode(
    State(app): State<App>,
    payload: Result<Json<ModeBody>, JsonRejection>,
) -> AppResult<Json<PlayerState>> {
    run(&app, Command::SetMode(body(payload)?.mode))
}

/// POST /api/video/progress - show or hide the progress bar
async fn toggle_progress(State(app): State<App>) -> AppResult<Json<PlayerState>> {
    run(&app, Command::ToggleProgressBar)
}

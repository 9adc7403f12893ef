//! Score submission, registration, dismissal, and state query endpoints
//!
//! Each route maps 1:1 to a `ScoreService` operation. The polling UI calls
//! `GET /state` every two seconds and must tolerate an empty pending list.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;
use crate::model::HighscoreState;
use crate::AppState;

/// Request body for POST /submit
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Completion time in seconds; rounded to whole seconds on acceptance
    pub time: f64,
}

/// Response for POST /submit
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub id: String,
}

/// Request body for POST /register
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub id: String,
    pub name: String,
    pub phone: String,
}

/// Request body for POST /dismiss
#[derive(Debug, Deserialize)]
pub struct DismissRequest {
    pub id: String,
}

/// Generic `{ok: true}` acknowledgement
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Error wrapper translating service errors into HTTP responses
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}

/// POST /submit
///
/// Records a new completion time as a pending entry and returns its id.
pub async fn submit_time(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let id = state.service.submit(req.time).await?;
    Ok(Json(SubmitResponse { ok: true, id }))
}

/// GET /state
///
/// Returns the full leaderboard and pending list. The response shape is
/// identical to the on-disk state file.
pub async fn get_state(State(state): State<AppState>) -> Json<HighscoreState> {
    Json(state.service.snapshot().await)
}

/// POST /register
///
/// Attaches a name and phone to a pending entry, ranking it into the
/// leaderboard. 404 for an unknown id, 400 for a blank name or phone.
pub async fn register_pending(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state
        .service
        .register(&req.id, &req.name, &req.phone)
        .await?;
    Ok(Json(OkResponse { ok: true }))
}

/// POST /dismiss
///
/// Discards a pending entry. Idempotent: dismissing an unknown or already
/// dismissed id still answers `{ok: true}`.
pub async fn dismiss_pending(
    State(state): State<AppState>,
    Json(req): Json<DismissRequest>,
) -> Json<OkResponse> {
    state.service.dismiss(&req.id).await;
    Json(OkResponse { ok: true })
}

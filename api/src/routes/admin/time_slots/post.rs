use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveTime;
use db::models::time_slot::{self, Day};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateTimeSlotRequest {
    pub day: Day,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// POST /admin/time-slots
///
/// ### Request Body
/// ```json
/// { "day": "monday", "start_time": "09:00:00", "end_time": "10:00:00" }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (end not after start)
/// - `409 Conflict` (same day and times already exist)
pub async fn create_time_slot(
    State(state): State<AppState>,
    Json(req): Json<CreateTimeSlotRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let slot = time_slot::Model::create(state.db(), req.day, req.start_time, req.end_time).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(slot, "Time slot created successfully")),
    ))
}

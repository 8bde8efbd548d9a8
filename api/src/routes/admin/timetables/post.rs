use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::timetable;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTimetableRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub time_slot_id: i64,

    #[serde(default)]
    #[validate(length(max = 20, message = "Room number is at most 20 characters"))]
    pub room_number: String,
}

/// POST /admin/timetables
///
/// ### Responses
/// - `201 Created`
/// - `409 Conflict` (the class already has an entry in that slot)
pub async fn create_timetable(
    State(state): State<AppState>,
    Json(req): Json<CreateTimetableRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let entry = timetable::Model::create(
        state.db(),
        req.class_id,
        req.subject_id,
        req.time_slot_id,
        &req.room_number,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(entry, "Timetable entry created successfully")),
    ))
}

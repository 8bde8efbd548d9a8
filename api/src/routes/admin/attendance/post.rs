use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use db::models::attendance;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::{AuthUser, PortalError};
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct MarkAttendanceRequest {
    /// The student's user id.
    pub student_id: i64,
    pub subject_id: i64,
    pub date: NaiveDate,
    pub is_present: bool,

    #[serde(default)]
    #[validate(length(max = 100, message = "Remarks are at most 100 characters"))]
    pub remarks: String,
}

/// POST /admin/attendance
///
/// Records one student's attendance for a subject on a date. The caller is
/// stored as the marker.
///
/// ### Request Body
/// ```json
/// {
///   "student_id": 3,
///   "subject_id": 1,
///   "date": "2024-09-02",
///   "is_present": true
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `409 Conflict` (already marked for that subject and date)
pub async fn mark_attendance(
    State(state): State<AppState>,
    marker: AuthUser,
    Json(req): Json<MarkAttendanceRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let record = attendance::Model::mark(
        state.db(),
        req.student_id,
        req.subject_id,
        req.date,
        req.is_present,
        Some(marker.id()),
        &req.remarks,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(record, "Attendance marked successfully")),
    ))
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::exam_result;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateResultRequest {
    /// The student's user id.
    pub student_id: i64,
    pub exam_id: i64,

    #[validate(range(min = 0, message = "Marks cannot be negative"))]
    pub marks_obtained: Option<i32>,

    #[serde(default)]
    pub remarks: String,

    #[serde(default)]
    pub is_published: bool,
}

/// POST /admin/results
///
/// Records a student's result for an exam. The grade is derived from the
/// marks and the exam's total.
///
/// ### Request Body
/// ```json
/// { "student_id": 3, "exam_id": 1, "marks_obtained": 45, "is_published": false }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `404 Not Found` (unknown exam)
/// - `409 Conflict` (result already exists for this student and exam)
pub async fn create_result(
    State(state): State<AppState>,
    Json(req): Json<CreateResultRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let result = exam_result::Model::create(
        state.db(),
        req.student_id,
        req.exam_id,
        req.marks_obtained,
        &req.remarks,
        req.is_published,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(result, "Result created successfully")),
    ))
}

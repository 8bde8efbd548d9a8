use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::exam;
use serde::Deserialize;
use util::state::AppState;
use validator::{Validate, ValidationError};

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

fn pass_within_total(req: &ExamMarksRequest) -> Result<(), ValidationError> {
    if req.pass_marks > req.total_marks {
        let mut err = ValidationError::new("pass_marks");
        err.message = Some("Pass marks cannot exceed total marks".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "pass_within_total"))]
pub struct ExamMarksRequest {
    #[validate(range(min = 1, message = "Total marks must be positive"))]
    pub total_marks: i32,

    #[validate(range(min = 1, message = "Pass marks must be positive"))]
    pub pass_marks: i32,
}

/// PUT /admin/exams/{exam_id}/marks
///
/// Changes the marking scheme. Every result of the exam is regraded against
/// the new total in the same transaction.
///
/// ### Request Body
/// ```json
/// { "total_marks": 100, "pass_marks": 40 }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated exam
/// - `400 Bad Request`
/// - `404 Not Found`
pub async fn update_exam_marks(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
    Json(req): Json<ExamMarksRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let exam =
        exam::Model::update_marks(state.db(), exam_id, req.total_marks, req.pass_marks).await?;

    Ok(Json(ApiResponse::success(
        exam,
        "Exam marks updated successfully",
    )))
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use db::models::exam::{self, ExamType, NewExam};
use serde::Deserialize;
use util::state::AppState;
use validator::{Validate, ValidationError};

use crate::auth::{AuthUser, PortalError};
use crate::response::ApiResponse;
use crate::routes::common::validate;

fn pass_within_total(req: &CreateExamRequest) -> Result<(), ValidationError> {
    if req.pass_marks > req.total_marks {
        let mut err = ValidationError::new("pass_marks");
        err.message = Some("Pass marks cannot exceed total marks".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "pass_within_total"))]
pub struct CreateExamRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,

    pub exam_type: ExamType,

    pub subject_id: i64,

    pub date: DateTime<Utc>,

    #[validate(range(min = 1, message = "Duration must be at least one minute"))]
    pub duration_minutes: i32,

    #[validate(range(min = 1, message = "Total marks must be positive"))]
    pub total_marks: i32,

    #[validate(range(min = 1, message = "Pass marks must be positive"))]
    pub pass_marks: i32,

    #[serde(default)]
    pub instructions: String,
}

/// POST /admin/exams
///
/// ### Request Body
/// ```json
/// {
///   "name": "Midterm",
///   "exam_type": "midterm",
///   "subject_id": 1,
///   "date": "2024-10-15T09:00:00Z",
///   "duration_minutes": 90,
///   "total_marks": 50,
///   "pass_marks": 20
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (validation failure or unknown subject)
pub async fn create_exam(
    State(state): State<AppState>,
    creator: AuthUser,
    Json(req): Json<CreateExamRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let exam = exam::Model::create(
        state.db(),
        NewExam {
            name: req.name,
            exam_type: req.exam_type,
            subject_id: req.subject_id,
            date: req.date,
            duration_minutes: req.duration_minutes,
            total_marks: req.total_marks,
            pass_marks: req.pass_marks,
            instructions: req.instructions,
            created_by: Some(creator.id()),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(exam, "Exam created successfully")),
    ))
}

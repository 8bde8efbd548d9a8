use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::subject;
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub course_id: i64,
    pub class_id: i64,
    pub teacher_id: Option<i64>,
}

/// POST /admin/subjects
///
/// Assigns a course to a class, optionally with a teacher.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (unknown course, class or teacher)
/// - `409 Conflict` (course already assigned to the class)
pub async fn create_subject(
    State(state): State<AppState>,
    Json(req): Json<CreateSubjectRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let subject =
        subject::Model::create(state.db(), req.course_id, req.class_id, req.teacher_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(subject, "Subject created successfully")),
    ))
}

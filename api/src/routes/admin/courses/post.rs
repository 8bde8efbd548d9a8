use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::course;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Code must be 1 to 20 characters"))]
    pub code: String,

    pub department_id: i64,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: i32,

    #[validate(range(min = 1, max = 6, message = "Credits must be between 1 and 6"))]
    pub credits: i32,

    #[serde(default)]
    pub description: String,
}

/// POST /admin/courses
///
/// ### Request Body
/// ```json
/// {
///   "name": "Data Structures",
///   "code": "CS201",
///   "department_id": 1,
///   "semester": 3,
///   "credits": 4
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (validation failure or unknown department)
/// - `409 Conflict` (code taken)
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let course = course::Model::create(
        state.db(),
        &req.name,
        &req.code,
        req.department_id,
        req.semester,
        req.credits,
        &req.description,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(course, "Course created successfully")),
    ))
}

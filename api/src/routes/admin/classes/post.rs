use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::class::{self, NewClass};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

fn default_section() -> String {
    "A".into()
}

fn default_max_strength() -> i32 {
    60
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,

    pub department_id: i64,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: i32,

    #[serde(default = "default_section")]
    #[validate(length(min = 1, max = 10, message = "Section must be 1 to 10 characters"))]
    pub section: String,

    #[validate(length(min = 1, max = 9, message = "Academic year must look like 2024-2025"))]
    pub academic_year: String,

    pub class_teacher_id: Option<i64>,

    #[serde(default = "default_max_strength")]
    #[validate(range(min = 1, message = "Max strength must be positive"))]
    pub max_strength: i32,
}

/// POST /admin/classes
///
/// ### Request Body
/// ```json
/// {
///   "name": "CS Semester 3 A",
///   "department_id": 1,
///   "semester": 3,
///   "section": "A",
///   "academic_year": "2024-2025",
///   "class_teacher_id": 2,
///   "max_strength": 60
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `409 Conflict` (same department, semester, section and year)
pub async fn create_class(
    State(state): State<AppState>,
    Json(req): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let class = class::Model::create(
        state.db(),
        NewClass {
            name: req.name,
            department_id: req.department_id,
            semester: req.semester,
            section: req.section,
            academic_year: req.academic_year,
            class_teacher_id: req.class_teacher_id,
            max_strength: req.max_strength,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(class, "Class created successfully")),
    ))
}

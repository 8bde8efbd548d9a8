use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use db::models::{
    teacher::{self, EmploymentType, NewTeacher, Qualification},
    user::{self, Role},
};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    pub user_id: i64,

    #[validate(length(min = 1, max = 20, message = "Employee id must be 1 to 20 characters"))]
    pub employee_id: String,

    pub department_id: i64,

    #[validate(length(min = 1, max = 100, message = "Designation must be 1 to 100 characters"))]
    pub designation: String,

    pub qualification: Qualification,

    #[serde(default)]
    pub specialization: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Experience cannot be negative"))]
    pub experience_years: i32,

    pub employment_type: EmploymentType,
    pub joining_date: NaiveDate,
    pub salary: Option<Decimal>,

    #[serde(default)]
    pub office_room: String,

    #[serde(default)]
    pub office_hours: String,
}

/// POST /admin/teachers
///
/// Attaches a teacher profile to an existing account with the teacher role.
///
/// ### Request Body
/// ```json
/// {
///   "user_id": 2,
///   "employee_id": "EMP002",
///   "department_id": 1,
///   "designation": "Lecturer",
///   "qualification": "phd",
///   "employment_type": "permanent",
///   "joining_date": "2021-07-01",
///   "salary": "55000.00"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request`
/// - `409 Conflict` (account already has a profile, or employee id taken)
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(req): Json<CreateTeacherRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let account = user::Entity::find_by_id(req.user_id)
        .one(state.db())
        .await?
        .ok_or_else(|| PortalError::BadRequest(format!("User {} does not exist", req.user_id)))?;
    if account.role != Role::Teacher {
        return Err(PortalError::BadRequest(
            "Teacher profiles can only be attached to teacher accounts".into(),
        ));
    }

    let teacher = teacher::Model::create(
        state.db(),
        NewTeacher {
            user_id: req.user_id,
            employee_id: req.employee_id,
            department_id: req.department_id,
            designation: req.designation,
            qualification: req.qualification,
            specialization: req.specialization,
            experience_years: req.experience_years,
            employment_type: req.employment_type,
            joining_date: req.joining_date,
            salary: req.salary,
            office_room: req.office_room,
            office_hours: req.office_hours,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(teacher, "Teacher created successfully")),
    ))
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use db::models::{
    student::{self, NewStudent},
    user::{self, Role},
};
use sea_orm::EntityTrait;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    pub user_id: i64,

    #[validate(length(min = 1, max = 20, message = "Roll number must be 1 to 20 characters"))]
    pub roll_number: String,

    #[validate(length(min = 1, max = 20, message = "Admission number must be 1 to 20 characters"))]
    pub admission_number: String,

    pub class_id: Option<i64>,
    pub department_id: i64,
    pub admission_date: NaiveDate,

    #[validate(length(min = 1, max = 100, message = "Guardian name is required"))]
    pub guardian_name: String,

    #[validate(length(min = 1, max = 15, message = "Guardian phone must be 1 to 15 characters"))]
    pub guardian_phone: String,

    #[serde(default)]
    pub guardian_email: String,

    #[serde(default)]
    pub guardian_address: String,

    #[validate(length(min = 1, max = 15, message = "Emergency contact must be 1 to 15 characters"))]
    pub emergency_contact: String,

    #[serde(default)]
    #[validate(length(max = 5, message = "Blood group is at most 5 characters"))]
    pub blood_group: String,

    #[serde(default)]
    pub medical_conditions: String,
}

/// POST /admin/students
///
/// Attaches a student profile to an existing account with the student role.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (validation failure, unknown account or wrong role)
/// - `409 Conflict` (account already has a profile, or roll/admission number taken)
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let account = user::Entity::find_by_id(req.user_id)
        .one(state.db())
        .await?
        .ok_or_else(|| PortalError::BadRequest(format!("User {} does not exist", req.user_id)))?;
    if account.role != Role::Student {
        return Err(PortalError::BadRequest(
            "Student profiles can only be attached to student accounts".into(),
        ));
    }

    let student = student::Model::create(
        state.db(),
        NewStudent {
            user_id: req.user_id,
            roll_number: req.roll_number,
            admission_number: req.admission_number,
            class_id: req.class_id,
            department_id: req.department_id,
            admission_date: req.admission_date,
            guardian_name: req.guardian_name,
            guardian_phone: req.guardian_phone,
            guardian_email: req.guardian_email,
            guardian_address: req.guardian_address,
            emergency_contact: req.emergency_contact,
            blood_group: req.blood_group,
            medical_conditions: req.medical_conditions,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(student, "Student created successfully")),
    ))
}

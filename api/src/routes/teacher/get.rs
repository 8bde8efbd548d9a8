use axum::{Json, response::IntoResponse};
use db::models::teacher::{EmploymentType, Qualification};
use serde::Serialize;

use crate::auth::TeacherContext;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct TeacherDashboard {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub employee_id: String,
    pub department_id: i64,
    pub designation: String,
    pub qualification: Qualification,
    pub employment_type: EmploymentType,
}

/// GET /teacher/dashboard
///
/// Placeholder landing page. Returns the caller's summary only.
pub async fn get_dashboard(TeacherContext { user, teacher }: TeacherContext) -> impl IntoResponse {
    let response = TeacherDashboard {
        id: teacher.id,
        full_name: user.full_name(),
        username: user.username,
        employee_id: teacher.employee_id,
        department_id: teacher.department_id,
        designation: teacher.designation,
        qualification: teacher.qualification,
        employment_type: teacher.employment_type,
    };
    Json(ApiResponse::success(response, "Welcome to the teacher portal"))
}

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::department;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::{ApiResponse, Empty};

/// DELETE /admin/departments/{department_id}
///
/// Cascades to the department's courses, classes, students and teachers.
pub async fn delete_department(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> Result<impl IntoResponse, PortalError> {
    let res = department::Entity::delete_by_id(department_id)
        .exec(state.db())
        .await?;
    if res.rows_affected == 0 {
        return Err(PortalError::NotFound(format!(
            "Department {department_id} not found"
        )));
    }

    tracing::info!(department = department_id, "Department deleted");
    Ok(Json(ApiResponse::success(
        Empty::default(),
        "Department deleted successfully",
    )))
}

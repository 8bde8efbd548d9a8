use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::student;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct StudentFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub department_id: Option<i64>,
    pub class_id: Option<i64>,
    pub is_active: Option<bool>,
}

/// GET /admin/students
///
/// Paginated student profiles ordered by roll number. `query` matches the
/// roll or admission number.
pub async fn list_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(student::Column::RollNumber.contains(q))
                .add(student::Column::AdmissionNumber.contains(q)),
        );
    }
    if let Some(department_id) = filter.department_id {
        condition = condition.add(student::Column::DepartmentId.eq(department_id));
    }
    if let Some(class_id) = filter.class_id {
        condition = condition.add(student::Column::ClassId.eq(class_id));
    }
    if let Some(is_active) = filter.is_active {
        condition = condition.add(student::Column::IsActive.eq(is_active));
    }

    let select = student::Entity::find()
        .filter(condition)
        .order_by_asc(student::Column::RollNumber);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(
        page,
        "Students retrieved successfully",
    )))
}

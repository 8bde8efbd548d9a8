use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::teacher::{self, EmploymentType};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct TeacherFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub department_id: Option<i64>,
    pub employment_type: Option<EmploymentType>,
    pub is_active: Option<bool>,
}

/// GET /admin/teachers
///
/// Paginated teacher profiles ordered by employee id. Salaries are never
/// listed.
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(filter): Query<TeacherFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(teacher::Column::EmployeeId.contains(q));
    }
    if let Some(department_id) = filter.department_id {
        condition = condition.add(teacher::Column::DepartmentId.eq(department_id));
    }
    if let Some(employment_type) = filter.employment_type {
        condition = condition.add(teacher::Column::EmploymentType.eq(employment_type));
    }
    if let Some(is_active) = filter.is_active {
        condition = condition.add(teacher::Column::IsActive.eq(is_active));
    }

    let select = teacher::Entity::find()
        .filter(condition)
        .order_by_asc(teacher::Column::EmployeeId);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(
        page,
        "Teachers retrieved successfully",
    )))
}

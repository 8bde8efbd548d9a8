use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::class;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct ClassFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub department_id: Option<i64>,
    pub semester: Option<i32>,
    pub academic_year: Option<String>,
}

/// GET /admin/classes
///
/// Paginated classes ordered by department, semester and section. `query`
/// matches name or section.
pub async fn list_classes(
    State(state): State<AppState>,
    Query(filter): Query<ClassFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(class::Column::Name.contains(q))
                .add(class::Column::Section.contains(q)),
        );
    }
    if let Some(department_id) = filter.department_id {
        condition = condition.add(class::Column::DepartmentId.eq(department_id));
    }
    if let Some(semester) = filter.semester {
        condition = condition.add(class::Column::Semester.eq(semester));
    }
    if let Some(year) = search_term(&filter.academic_year) {
        condition = condition.add(class::Column::AcademicYear.eq(year));
    }

    let select = class::Entity::find()
        .filter(condition)
        .order_by_asc(class::Column::DepartmentId)
        .order_by_asc(class::Column::Semester)
        .order_by_asc(class::Column::Section);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(page, "Classes retrieved successfully")))
}

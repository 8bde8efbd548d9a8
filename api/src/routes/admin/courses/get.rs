use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::course;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct CourseFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub department_id: Option<i64>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
}

/// GET /admin/courses
///
/// Paginated courses ordered by code.
///
/// ### Query Parameters
/// - `query` (optional): Match on name or code
/// - `department_id`, `semester`, `credits` (optional): Exact filters
pub async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(course::Column::Name.contains(q))
                .add(course::Column::Code.contains(q)),
        );
    }
    if let Some(department_id) = filter.department_id {
        condition = condition.add(course::Column::DepartmentId.eq(department_id));
    }
    if let Some(semester) = filter.semester {
        condition = condition.add(course::Column::Semester.eq(semester));
    }
    if let Some(credits) = filter.credits {
        condition = condition.add(course::Column::Credits.eq(credits));
    }

    let select = course::Entity::find()
        .filter(condition)
        .order_by_asc(course::Column::Code);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(page, "Courses retrieved successfully")))
}

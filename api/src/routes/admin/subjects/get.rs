use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::{class, course, subject};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct SubjectFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    /// Department of the subject's course.
    pub department_id: Option<i64>,
    /// Semester of the class the subject is taught to.
    pub semester: Option<i32>,
}

/// GET /admin/subjects
///
/// Paginated subjects ordered by course code. `query` matches the course
/// name or code.
pub async fn list_subjects(
    State(state): State<AppState>,
    Query(filter): Query<SubjectFilter>,
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
        condition = condition.add(class::Column::Semester.eq(semester));
    }

    let select = subject::Entity::find()
        .join(JoinType::InnerJoin, subject::Relation::Course.def())
        .join(JoinType::InnerJoin, subject::Relation::Class.def())
        .filter(condition)
        .order_by_asc(course::Column::Code)
        .order_by_asc(subject::Column::Id);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(
        page,
        "Subjects retrieved successfully",
    )))
}

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::{
    grade::Grade,
    models::{exam, exam_result, user},
};
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
pub struct ResultFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub grade: Option<Grade>,
    pub is_published: Option<bool>,
    pub exam_id: Option<i64>,
}

/// GET /admin/results
///
/// Paginated results, most recent exam first. `query` matches the student's
/// username or the exam name. `grade` takes the letter form, e.g. `A+`
/// (URL-encoded as `A%2B`).
pub async fn list_results(
    State(state): State<AppState>,
    Query(filter): Query<ResultFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(user::Column::Username.contains(q))
                .add(exam::Column::Name.contains(q)),
        );
    }
    if let Some(grade) = filter.grade {
        condition = condition.add(exam_result::Column::Grade.eq(grade));
    }
    if let Some(is_published) = filter.is_published {
        condition = condition.add(exam_result::Column::IsPublished.eq(is_published));
    }
    if let Some(exam_id) = filter.exam_id {
        condition = condition.add(exam_result::Column::ExamId.eq(exam_id));
    }

    let select = exam_result::Entity::find()
        .join(JoinType::InnerJoin, exam_result::Relation::Student.def())
        .join(JoinType::InnerJoin, exam_result::Relation::Exam.def())
        .filter(condition)
        .order_by_desc(exam::Column::Date)
        .order_by_asc(user::Column::Username);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(page, "Results retrieved successfully")))
}

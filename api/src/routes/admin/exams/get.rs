use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::exam::{self, ExamType};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct ExamFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub exam_type: Option<ExamType>,
    pub subject_id: Option<i64>,
}

/// GET /admin/exams
///
/// Paginated exams, latest date first. `query` matches the exam name.
pub async fn list_exams(
    State(state): State<AppState>,
    Query(filter): Query<ExamFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(exam::Column::Name.contains(q));
    }
    if let Some(exam_type) = filter.exam_type {
        condition = condition.add(exam::Column::ExamType.eq(exam_type));
    }
    if let Some(subject_id) = filter.subject_id {
        condition = condition.add(exam::Column::SubjectId.eq(subject_id));
    }

    let select = exam::Entity::find()
        .filter(condition)
        .order_by_desc(exam::Column::Date)
        .order_by_desc(exam::Column::Id);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(page, "Exams retrieved successfully")))
}

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use db::models::{attendance, user};
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
pub struct AttendanceFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub date: Option<NaiveDate>,
    pub is_present: Option<bool>,
    pub subject_id: Option<i64>,
}

/// GET /admin/attendance
///
/// Paginated attendance records, most recent date first. `query` matches the
/// student's username.
///
/// ### Query Parameters
/// - `date` (optional): `YYYY-MM-DD`
/// - `is_present` (optional): `true` or `false`
/// - `subject_id` (optional)
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(filter): Query<AttendanceFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(user::Column::Username.contains(q));
    }
    if let Some(date) = filter.date {
        condition = condition.add(attendance::Column::Date.eq(date));
    }
    if let Some(is_present) = filter.is_present {
        condition = condition.add(attendance::Column::IsPresent.eq(is_present));
    }
    if let Some(subject_id) = filter.subject_id {
        condition = condition.add(attendance::Column::SubjectId.eq(subject_id));
    }

    let select = attendance::Entity::find()
        .join(JoinType::InnerJoin, attendance::Relation::Student.def())
        .filter(condition)
        .order_by_desc(attendance::Column::Date)
        .order_by_desc(attendance::Column::Id);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(
        page,
        "Attendance retrieved successfully",
    )))
}

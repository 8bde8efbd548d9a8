use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::{class, course, subject, time_slot, timetable};
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
pub struct TimetableFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    /// Department of the class.
    pub department_id: Option<i64>,
    pub day: Option<time_slot::Day>,
}

/// GET /admin/timetables
///
/// Paginated timetable entries grouped by class. `query` matches the room
/// number or the course name.
pub async fn list_timetables(
    State(state): State<AppState>,
    Query(filter): Query<TimetableFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(timetable::Column::RoomNumber.contains(q))
                .add(course::Column::Name.contains(q)),
        );
    }
    if let Some(department_id) = filter.department_id {
        condition = condition.add(class::Column::DepartmentId.eq(department_id));
    }
    if let Some(day) = filter.day {
        condition = condition.add(time_slot::Column::Day.eq(day));
    }

    let select = timetable::Entity::find()
        .join(JoinType::InnerJoin, timetable::Relation::Class.def())
        .join(JoinType::InnerJoin, timetable::Relation::TimeSlot.def())
        .join(JoinType::InnerJoin, timetable::Relation::Subject.def())
        .join(JoinType::InnerJoin, subject::Relation::Course.def())
        .filter(condition)
        .order_by_asc(timetable::Column::ClassId)
        .order_by_asc(time_slot::Column::StartTime)
        .order_by_asc(timetable::Column::Id);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(
        page,
        "Timetables retrieved successfully",
    )))
}

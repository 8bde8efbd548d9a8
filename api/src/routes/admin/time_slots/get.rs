use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::time_slot::{self, Day};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::Page;

#[derive(Debug, Deserialize)]
pub struct TimeSlotFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub day: Option<Day>,
}

/// GET /admin/time-slots
///
/// Slots in weekday order, then by start time. Days are stored by name, so
/// the ordering is applied after loading.
pub async fn list_time_slots(
    State(state): State<AppState>,
    Query(filter): Query<TimeSlotFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let slots: Vec<time_slot::Model> = time_slot::Model::all_ordered(state.db())
        .await?
        .into_iter()
        .filter(|slot| filter.day.is_none_or(|day| slot.day == day))
        .collect();

    Ok(Json(ApiResponse::success(
        Page::from_vec(slots, filter.page, filter.per_page),
        "Time slots retrieved successfully",
    )))
}

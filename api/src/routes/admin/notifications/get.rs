use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::notification::{self, Audience, NotificationType};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct NotificationFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub notification_type: Option<NotificationType>,
    pub target_audience: Option<Audience>,
    pub is_urgent: Option<bool>,
}

/// GET /admin/notifications
///
/// Every notification, expired ones included, newest first. `query` matches
/// the title.
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(filter): Query<NotificationFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(notification::Column::Title.contains(q));
    }
    if let Some(kind) = filter.notification_type {
        condition = condition.add(notification::Column::NotificationType.eq(kind));
    }
    if let Some(audience) = filter.target_audience {
        condition = condition.add(notification::Column::TargetAudience.eq(audience));
    }
    if let Some(is_urgent) = filter.is_urgent {
        condition = condition.add(notification::Column::IsUrgent.eq(is_urgent));
    }

    let select = notification::Entity::find()
        .filter(condition)
        .order_by_desc(notification::Column::CreatedAt)
        .order_by_desc(notification::Column::Id);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(
        page,
        "Notifications retrieved successfully",
    )))
}

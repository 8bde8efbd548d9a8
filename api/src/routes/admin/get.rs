use axum::{Json, extract::State, response::IntoResponse};
use db::models::user;
use sea_orm::EntityTrait;
use serde::Serialize;
use util::state::AppState;

use crate::auth::{AuthUser, PortalError};
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub id: i64,
    pub username: String,
    pub full_name: String,
}

/// GET /admin/dashboard
///
/// Placeholder landing page of the administrative interface.
pub async fn get_dashboard(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, PortalError> {
    let admin = user::Entity::find_by_id(claims.sub)
        .one(state.db())
        .await?
        .ok_or_else(|| PortalError::Unauthenticated("Account no longer exists".into()))?;

    Ok(Json(ApiResponse::success(
        AdminDashboard {
            id: admin.id,
            full_name: admin.full_name(),
            username: admin.username,
        },
        "Welcome to the admin portal",
    )))
}

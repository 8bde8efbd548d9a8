use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use db::models::user;
use sea_orm::EntityTrait;
use serde::Serialize;
use util::state::AppState;

use crate::auth::{AuthUser, PortalError, portal_path};
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for MeResponse {
    fn from(user: user::Model) -> Self {
        Self {
            full_name: user.full_name(),
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// GET /auth/me
///
/// Returns the authenticated caller's account.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 3,
///     "username": "student1",
///     "email": "student1@college.edu",
///     "first_name": "Jane",
///     "last_name": "Smith",
///     "full_name": "Jane Smith",
///     "role": "student",
///     "is_active": true,
///     "created_at": "2025-05-23T18:00:00Z"
///   },
///   "message": "User data retrieved successfully"
/// }
/// ```
///
/// - `401 Unauthorized` (no or bad token)
/// - `404 Not Found` (account removed since the token was issued)
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, PortalError> {
    let user = user::Entity::find_by_id(claims.sub)
        .one(state.db())
        .await?
        .ok_or_else(|| PortalError::NotFound("User not found".into()))?;

    Ok(Json(ApiResponse::success(
        MeResponse::from(user),
        "User data retrieved successfully",
    )))
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub role: String,
    pub portal: String,
}

/// GET /auth/dashboard
///
/// Tells the client which portal the caller belongs to.
pub async fn get_dashboard(user: AuthUser) -> impl IntoResponse {
    let role = user.role();
    Json(ApiResponse::success(
        DashboardResponse {
            role: role.to_string(),
            portal: portal_path(role).to_string(),
        },
        "Dashboard located",
    ))
}

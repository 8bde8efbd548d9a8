use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::user;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::auth::{AuthUser, PortalError};
use crate::response::{ApiResponse, Empty};

/// DELETE /admin/users/{user_id}
///
/// Removes an account. Its profile, attendance, results and fees go with it;
/// classes and subjects it taught lose their teacher.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` (deleting your own account)
/// - `404 Not Found`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    caller: AuthUser,
) -> Result<impl IntoResponse, PortalError> {
    if caller.id() == user_id {
        return Err(PortalError::BadRequest(
            "You cannot delete your own account".into(),
        ));
    }

    let res = user::Entity::delete_by_id(user_id).exec(state.db()).await?;
    if res.rows_affected == 0 {
        return Err(PortalError::NotFound(format!("User {user_id} not found")));
    }

    tracing::info!(user = user_id, by = caller.id(), "User deleted");
    Ok(Json(ApiResponse::success(
        Empty::default(),
        "User deleted successfully",
    )))
}

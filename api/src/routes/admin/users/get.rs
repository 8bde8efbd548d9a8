use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::user::{self, Role};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct UserFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

/// GET /admin/users
///
/// Paginated accounts ordered by username.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Items per page (default: 20, max: 100)
/// - `query` (optional): Case-insensitive match on username or email
/// - `role` (optional): `admin`, `teacher` or `student`
/// - `is_active` (optional): `true` or `false`
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "items": [
///       {
///         "id": 1,
///         "username": "admin",
///         "email": "admin@college.edu",
///         "first_name": "System",
///         "last_name": "Administrator",
///         "role": "admin",
///         "is_active": true,
///         "created_at": "2025-05-23T18:00:00Z",
///         "updated_at": "2025-05-23T18:00:00Z"
///       }
///     ],
///     "page": 1,
///     "per_page": 20,
///     "total": 1
///   },
///   "message": "Users retrieved successfully"
/// }
/// ```
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();

    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(user::Column::Username.contains(q))
                .add(user::Column::Email.contains(q)),
        );
    }
    if let Some(role) = filter.role {
        condition = condition.add(user::Column::Role.eq(role));
    }
    if let Some(is_active) = filter.is_active {
        condition = condition.add(user::Column::IsActive.eq(is_active));
    }

    let select = user::Entity::find()
        .filter(condition)
        .order_by_asc(user::Column::Username);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(page, "Users retrieved successfully")))
}

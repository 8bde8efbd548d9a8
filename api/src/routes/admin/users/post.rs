use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::{self, Role};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1 to 150 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub role: Role,
}

/// POST /admin/users
///
/// Creates an account. Profiles are created separately through
/// `/admin/students` and `/admin/teachers`.
///
/// ### Request Body
/// ```json
/// {
///   "username": "student2",
///   "email": "student2@college.edu",
///   "first_name": "Sam",
///   "last_name": "Lee",
///   "password": "secret123",
///   "role": "student"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the new user
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (username taken)
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let user = user::Model::create(
        state.db(),
        &req.username,
        &req.email,
        &req.first_name,
        &req.last_name,
        &req.password,
        req.role,
    )
    .await?;

    tracing::info!(user = user.id, role = %user.role, "User created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(user, "User created successfully")),
    ))
}

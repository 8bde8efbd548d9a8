use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::{AuthUser, PortalError, generate_jwt, portal_path};
use crate::response::{ApiResponse, Empty};
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub token: String,
    pub expires_at: String,
    pub portal: String,
}

/// POST /auth/login
///
/// Exchanges credentials for a bearer token.
///
/// ### Request Body
/// ```json
/// {
///   "username": "student1",
///   "password": "student123"
/// }
/// ```
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
///     "role": "student",
///     "token": "jwt_token_here",
///     "expires_at": "2025-05-23T11:00:00Z",
///     "portal": "/api/student/dashboard"
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `400 Bad Request` (missing fields)
/// - `401 Unauthorized`
/// ```json
/// {
///   "success": false,
///   "data": {},
///   "message": "Invalid username or password."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let user = user::Model::verify_credentials(state.db(), &req.username, &req.password)
        .await?
        .ok_or_else(|| {
            tracing::info!(username = %req.username, "Failed login attempt");
            PortalError::Unauthenticated("Invalid username or password.".into())
        })?;

    let (token, expires_at) = generate_jwt(user.id, user.role)
        .map_err(|e| PortalError::Internal(format!("Failed to issue token: {e}")))?;

    tracing::info!(user = user.id, role = %user.role, "User logged in");

    let response = LoginResponse {
        id: user.id,
        username: user.username,
        role: user.role.to_string(),
        token,
        expires_at,
        portal: portal_path(user.role).to_string(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(response, "Login successful")),
    ))
}

/// POST /auth/logout
///
/// Tokens are stateless, so this only confirms the caller was signed in. The
/// client discards its token.
pub async fn logout(user: AuthUser) -> impl IntoResponse {
    tracing::info!(user = user.id(), "User logged out");
    Json(ApiResponse::<Empty>::success(
        Empty::default(),
        "You have been successfully logged out.",
    ))
}


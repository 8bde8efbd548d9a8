use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::department;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 10, message = "Code must be 1 to 10 characters"))]
    pub code: String,

    pub head_id: Option<i64>,

    #[serde(default)]
    pub description: String,
}

/// POST /admin/departments
///
/// ### Request Body
/// ```json
/// {
///   "name": "Physics",
///   "code": "PHY",
///   "head_id": null,
///   "description": "Department of Physics"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (validation failure or unknown head)
/// - `409 Conflict` (name or code taken)
pub async fn create_department(
    State(state): State<AppState>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let department = department::Model::create(
        state.db(),
        &req.name,
        &req.code,
        req.head_id,
        &req.description,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            department,
            "Department created successfully",
        )),
    ))
}

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::exam_result;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub is_published: bool,
}

/// PATCH /admin/results/{result_id}
///
/// ### Request Body
/// ```json
/// { "is_published": true }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated result
/// - `404 Not Found`
pub async fn publish_result(
    State(state): State<AppState>,
    Path(result_id): Path<i64>,
    Json(req): Json<PublishRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let result = exam_result::Model::set_published(state.db(), result_id, req.is_published).await?;

    Ok(Json(ApiResponse::success(result, "Result updated successfully")))
}

#[derive(Debug, Deserialize, Validate)]
pub struct BulkPublishRequest {
    #[validate(length(min = 1, message = "At least one id is required"))]
    pub ids: Vec<i64>,
    pub is_published: bool,
}

#[derive(Debug, Serialize)]
pub struct BulkUpdateResponse {
    pub updated: u64,
}

/// PATCH /admin/results
///
/// Publishes or withdraws many results at once.
///
/// ### Request Body
/// ```json
/// { "ids": [1, 2, 3], "is_published": true }
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": { "updated": 3 }, "message": "3 results updated" }
/// ```
pub async fn publish_results(
    State(state): State<AppState>,
    Json(req): Json<BulkPublishRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let updated =
        exam_result::Model::set_published_bulk(state.db(), &req.ids, req.is_published).await?;
    tracing::info!(updated, is_published = req.is_published, "Results publish flag toggled");

    Ok(Json(ApiResponse::success(
        BulkUpdateResponse { updated },
        format!("{updated} results updated"),
    )))
}

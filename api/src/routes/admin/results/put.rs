use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::exam_result;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ResultMarksRequest {
    #[validate(range(min = 0, message = "Marks cannot be negative"))]
    pub marks_obtained: Option<i32>,
    pub remarks: Option<String>,
}

/// PUT /admin/results/{result_id}/marks
///
/// Enters or clears the marks of a result. The grade follows.
///
/// ### Request Body
/// ```json
/// { "marks_obtained": 42, "remarks": "Good work" }
/// ```
///
/// ### Responses
/// - `200 OK` with the regraded result
/// - `404 Not Found`
pub async fn update_result_marks(
    State(state): State<AppState>,
    Path(result_id): Path<i64>,
    Json(req): Json<ResultMarksRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let result = exam_result::Model::set_marks(
        state.db(),
        result_id,
        req.marks_obtained,
        req.remarks.as_deref(),
    )
    .await?;

    Ok(Json(ApiResponse::success(result, "Marks updated successfully")))
}

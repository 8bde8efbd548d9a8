use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::class;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::{ApiResponse, Empty};

/// DELETE /admin/classes/{class_id}
///
/// Removes the class with its subjects and timetable. Students of the class
/// are kept without a class.
pub async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Result<impl IntoResponse, PortalError> {
    let res = class::Entity::delete_by_id(class_id).exec(state.db()).await?;
    if res.rows_affected == 0 {
        return Err(PortalError::NotFound(format!("Class {class_id} not found")));
    }

    tracing::info!(class = class_id, "Class deleted");
    Ok(Json(ApiResponse::success(
        Empty::default(),
        "Class deleted successfully",
    )))
}

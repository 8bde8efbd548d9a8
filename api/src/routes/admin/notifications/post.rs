use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use db::models::notification::{self, Audience, NewNotification, NotificationType};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::{AuthUser, PortalError};
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    pub notification_type: NotificationType,
    pub target_audience: Audience,
    pub target_class_id: Option<i64>,
    pub target_department_id: Option<i64>,
    /// Student profile id.
    pub target_student_id: Option<i64>,

    #[serde(default)]
    pub is_urgent: bool,

    pub expires_at: Option<DateTime<Utc>>,
}

/// POST /admin/notifications
///
/// Publishes a notification from the caller. The target matching the
/// audience must be given.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Lab closed",
///   "message": "The CS lab is closed on Friday.",
///   "notification_type": "general",
///   "target_audience": "department",
///   "target_department_id": 1,
///   "is_urgent": false
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (missing or unknown target)
pub async fn create_notification(
    State(state): State<AppState>,
    author: AuthUser,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let notification = notification::Model::create(
        state.db(),
        NewNotification {
            title: req.title,
            message: req.message,
            notification_type: req.notification_type,
            target_audience: req.target_audience,
            target_class_id: req.target_class_id,
            target_department_id: req.target_department_id,
            target_student_id: req.target_student_id,
            is_urgent: req.is_urgent,
            created_by: author.id(),
            expires_at: req.expires_at,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            notification,
            "Notification created successfully",
        )),
    ))
}

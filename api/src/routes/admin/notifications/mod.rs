pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_notifications;
use post::create_notification;

/// - `GET /admin/notifications` → `list_notifications`
/// - `POST /admin/notifications` → `create_notification`
pub fn notification_routes() -> Router<AppState> {
    Router::new().route("/", get(list_notifications).post(create_notification))
}

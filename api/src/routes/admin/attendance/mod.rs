pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_attendance;
use post::mark_attendance;

/// - `GET /admin/attendance` → `list_attendance`
/// - `POST /admin/attendance` → `mark_attendance`
pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/", get(list_attendance).post(mark_attendance))
}

pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_teachers;
use post::create_teacher;

/// - `GET /admin/teachers` → `list_teachers`
/// - `POST /admin/teachers` → `create_teacher`
pub fn teacher_routes() -> Router<AppState> {
    Router::new().route("/", get(list_teachers).post(create_teacher))
}

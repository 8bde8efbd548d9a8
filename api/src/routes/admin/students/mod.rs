pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_students;
use post::create_student;

/// - `GET /admin/students` → `list_students`
/// - `POST /admin/students` → `create_student`
pub fn student_routes() -> Router<AppState> {
    Router::new().route("/", get(list_students).post(create_student))
}

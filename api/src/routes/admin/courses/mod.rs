pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_courses;
use post::create_course;

/// - `GET /admin/courses` → `list_courses`
/// - `POST /admin/courses` → `create_course`
pub fn course_routes() -> Router<AppState> {
    Router::new().route("/", get(list_courses).post(create_course))
}

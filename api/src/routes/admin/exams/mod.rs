pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

use get::list_exams;
use post::create_exam;
use put::update_exam_marks;

/// - `GET /admin/exams` → `list_exams`
/// - `POST /admin/exams` → `create_exam`
/// - `PUT /admin/exams/{exam_id}/marks` → `update_exam_marks`
pub fn exam_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exams).post(create_exam))
        .route("/{exam_id}/marks", put(update_exam_marks))
}

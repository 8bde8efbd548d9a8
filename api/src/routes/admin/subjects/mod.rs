pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_subjects;
use post::create_subject;

/// - `GET /admin/subjects` → `list_subjects`
/// - `POST /admin/subjects` → `create_subject`
pub fn subject_routes() -> Router<AppState> {
    Router::new().route("/", get(list_subjects).post(create_subject))
}

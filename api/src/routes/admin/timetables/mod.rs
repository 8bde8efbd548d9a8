pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_timetables;
use post::create_timetable;

/// - `GET /admin/timetables` → `list_timetables`
/// - `POST /admin/timetables` → `create_timetable`
pub fn timetable_routes() -> Router<AppState> {
    Router::new().route("/", get(list_timetables).post(create_timetable))
}

pub mod get;
pub mod post;

use axum::{Router, routing::get};
use util::state::AppState;

use get::list_time_slots;
use post::create_time_slot;

/// - `GET /admin/time-slots` → `list_time_slots`
/// - `POST /admin/time-slots` → `create_time_slot`
pub fn time_slot_routes() -> Router<AppState> {
    Router::new().route("/", get(list_time_slots).post(create_time_slot))
}

pub mod delete;
pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{delete, get},
};
use util::state::AppState;

use delete::delete_class;
use get::list_classes;
use post::create_class;

/// - `GET /admin/classes` → `list_classes`
/// - `POST /admin/classes` → `create_class`
/// - `DELETE /admin/classes/{class_id}` → `delete_class`
pub fn class_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route("/{class_id}", delete(delete_class))
}

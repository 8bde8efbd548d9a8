pub mod delete;
pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{delete, get},
};
use util::state::AppState;

use delete::delete_department;
use get::list_departments;
use post::create_department;

/// - `GET /admin/departments` → `list_departments`
/// - `POST /admin/departments` → `create_department`
/// - `DELETE /admin/departments/{department_id}` → `delete_department`
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route("/{department_id}", delete(delete_department))
}

pub mod get;
pub mod patch;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, patch, put},
};
use util::state::AppState;

use get::list_results;
use patch::{publish_result, publish_results};
use post::create_result;
use put::update_result_marks;

/// - `GET /admin/results` → `list_results`
/// - `POST /admin/results` → `create_result`
/// - `PATCH /admin/results` → `publish_results` (bulk)
/// - `PATCH /admin/results/{result_id}` → `publish_result`
/// - `PUT /admin/results/{result_id}/marks` → `update_result_marks`
pub fn result_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_results).post(create_result).patch(publish_results),
        )
        .route("/{result_id}", patch(publish_result))
        .route("/{result_id}/marks", put(update_result_marks))
}

pub mod get;
pub mod patch;
pub mod post;

use axum::{
    Router,
    routing::{get, patch},
};
use util::state::AppState;

use get::list_fees;
use patch::{update_fee, update_fee_statuses};
use post::create_fee;

/// - `GET /admin/fees` → `list_fees`
/// - `POST /admin/fees` → `create_fee`
/// - `PATCH /admin/fees` → `update_fee_statuses` (bulk)
/// - `PATCH /admin/fees/{fee_id}` → `update_fee`
pub fn fee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_fees).post(create_fee).patch(update_fee_statuses),
        )
        .route("/{fee_id}", patch(update_fee))
}

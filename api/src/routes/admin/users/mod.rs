pub mod delete;
pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{delete, get},
};
use util::state::AppState;

use delete::delete_user;
use get::list_users;
use post::create_user;

/// - `GET /admin/users` → `list_users`
/// - `POST /admin/users` → `create_user`
/// - `DELETE /admin/users/{user_id}` → `delete_user`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{user_id}", delete(delete_user))
}

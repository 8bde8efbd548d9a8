//! # auth Routes Module
//!
//! Routes for the `/auth` endpoint group.
//!
//! - `post.rs`: login and logout
//! - `get.rs`: current user and dashboard lookup

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::{get_dashboard, get_me};
use post::{login, logout};

/// Builds the `/auth` route group.
///
/// - `POST /auth/login` → `login`
/// - `POST /auth/logout` → `logout`
/// - `GET /auth/me` → `get_me`
/// - `GET /auth/dashboard` → `get_dashboard`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(get_me))
        .route("/dashboard", get(get_dashboard))
}

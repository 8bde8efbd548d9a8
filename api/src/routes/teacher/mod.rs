//! # teacher Routes Module
//!
//! The teacher portal currently exposes only its landing page.

pub mod get;

use axum::{Router, routing::get};
use util::state::AppState;

use get::get_dashboard;

/// Builds the `/teacher` route group.
///
/// - `GET /teacher/dashboard`
pub fn teacher_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Login, logout, profile and dashboard lookup
//! - `/student` → Student portal (student role, student profile required)
//! - `/teacher` → Teacher portal (teacher role, teacher profile required)
//! - `/admin` → Administrative interface (admin role)

use axum::{Router, middleware::from_fn_with_state};
use util::state::AppState;

use crate::auth::guards::{allow_admin, allow_student, allow_teacher};
use crate::routes::{
    admin::admin_routes, auth::auth_routes, health::health_routes, student::student_routes,
    teacher::teacher_routes,
};

pub mod admin;
pub mod auth;
pub mod common;
pub mod health;
pub mod student;
pub mod teacher;

/// Builds the complete application router for all HTTP endpoints, ready to be
/// nested under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/student",
            student_routes().route_layer(from_fn_with_state(app_state.clone(), allow_student)),
        )
        .nest(
            "/teacher",
            teacher_routes().route_layer(from_fn_with_state(app_state.clone(), allow_teacher)),
        )
        .nest(
            "/admin",
            admin_routes().route_layer(from_fn_with_state(app_state.clone(), allow_admin)),
        )
        .with_state(app_state)
}

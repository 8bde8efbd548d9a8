//! # student Routes Module
//!
//! Read-only views of the student portal. The whole group sits behind
//! `allow_student`; each handler additionally resolves the caller's student
//! profile through [`StudentContext`](crate::auth::StudentContext).

pub mod common;
pub mod get;

use axum::{Router, routing::get};
use util::state::AppState;

use get::{
    get_attendance, get_dashboard, get_exams, get_fees, get_notifications, get_results,
    get_timetable,
};

/// Builds the `/student` route group.
///
/// - `GET /student/dashboard`
/// - `GET /student/timetable`
/// - `GET /student/attendance`
/// - `GET /student/exams`
/// - `GET /student/results`
/// - `GET /student/fees`
/// - `GET /student/notifications`
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/timetable", get(get_timetable))
        .route("/attendance", get(get_attendance))
        .route("/exams", get(get_exams))
        .route("/results", get(get_results))
        .route("/fees", get(get_fees))
        .route("/notifications", get(get_notifications))
}

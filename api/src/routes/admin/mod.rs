//! # admin Routes Module
//!
//! Administrative interface over every table. Each resource has a paginated
//! list (`page`, `per_page`, `query` plus resource filters) and a create
//! endpoint. The whole group sits behind `allow_admin`.

pub mod attendance;
pub mod classes;
pub mod courses;
pub mod departments;
pub mod exams;
pub mod fees;
pub mod get;
pub mod notifications;
pub mod results;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod time_slots;
pub mod timetables;
pub mod users;

use axum::{Router, routing::get};
use util::state::AppState;

/// Builds the `/admin` route group.
///
/// - `GET /admin/dashboard`
/// - `/admin/users`, `/admin/departments`, `/admin/courses`, `/admin/classes`
/// - `/admin/subjects`, `/admin/time-slots`, `/admin/timetables`
/// - `/admin/attendance`, `/admin/exams`, `/admin/results`, `/admin/fees`
/// - `/admin/students`, `/admin/teachers`, `/admin/notifications`
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get::get_dashboard))
        .nest("/users", users::user_routes())
        .nest("/departments", departments::department_routes())
        .nest("/courses", courses::course_routes())
        .nest("/classes", classes::class_routes())
        .nest("/subjects", subjects::subject_routes())
        .nest("/time-slots", time_slots::time_slot_routes())
        .nest("/timetables", timetables::timetable_routes())
        .nest("/attendance", attendance::attendance_routes())
        .nest("/exams", exams::exam_routes())
        .nest("/results", results::result_routes())
        .nest("/fees", fees::fee_routes())
        .nest("/students", students::student_routes())
        .nest("/teachers", teachers::teacher_routes())
        .nest("/notifications", notifications::notification_routes())
}

//! Student portal views.
//!
//! Every handler takes a [`StudentContext`], so a caller without a student
//! profile never reaches the queries below.

use std::collections::HashMap;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use db::models::{
    attendance::{self, AttendanceSummary},
    class, department,
    exam::{self, Schedule},
    exam_result, fee,
    fee::PaymentStatus,
    notification::{self, Viewer},
    subject::{self, CourseLabel},
    timetable::{self, DaySchedule},
};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde::Serialize;
use util::state::AppState;

use super::common::{
    AttendanceRecordView, ExamView, FeeView, ProfileSummary, ResultView, SubjectAttendance,
};
use crate::auth::{PortalError, StudentContext};
use crate::response::ApiResponse;

const DASHBOARD_EXAMS: u64 = 5;
const DASHBOARD_NOTIFICATIONS: u64 = 5;

const NO_CLASS_WARNING: &str = "You are not assigned to any class. Please contact administrator.";

async fn exam_views(
    db: &DatabaseConnection,
    exams: Vec<exam::Model>,
) -> Result<Vec<ExamView>, DbErr> {
    let subject_ids: Vec<i64> = exams.iter().map(|e| e.subject_id).collect();
    let labels = subject::Model::course_labels(db, &subject_ids).await?;
    Ok(exams
        .into_iter()
        .map(|exam| ExamView::new(exam, &labels))
        .collect())
}

async fn class_exams(
    db: &DatabaseConnection,
    class_id: Option<i64>,
    schedule: Schedule,
    limit: Option<u64>,
) -> Result<Vec<exam::Model>, DbErr> {
    match class_id {
        Some(class_id) => exam::Model::for_class(db, class_id, Utc::now(), schedule, limit).await,
        None => Ok(Vec::new()),
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub profile: ProfileSummary,
    pub attendance_percentage: f64,
    pub upcoming_exams: Vec<ExamView>,
    pub pending_fees: Vec<FeeView>,
    pub notifications: Vec<notification::Model>,
}

/// GET /student/dashboard
///
/// Summary landing page of the student portal.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "profile": { "roll_number": "CS001", "class_name": "CS Semester 1 A", "...": "..." },
///     "attendance_percentage": 87.5,
///     "upcoming_exams": [ { "name": "Midterm", "course_code": "CS101", "...": "..." } ],
///     "pending_fees": [ { "amount": "15000.00", "is_overdue": false, "...": "..." } ],
///     "notifications": [ { "title": "Welcome", "...": "..." } ]
///   },
///   "message": "Dashboard retrieved successfully"
/// }
/// ```
///
/// - `403 Forbidden` (not a student, with `redirect`)
/// - `404 Not Found` (no student profile, with `redirect`)
pub async fn get_dashboard(
    State(state): State<AppState>,
    StudentContext { user, student }: StudentContext,
) -> Result<impl IntoResponse, PortalError> {
    let db = state.db();
    let now = Utc::now();

    let class = match student.class_id {
        Some(id) => class::Entity::find_by_id(id).one(db).await?,
        None => None,
    };
    let department = department::Entity::find_by_id(student.department_id)
        .one(db)
        .await?;

    let attendance = attendance::Model::summary(db, user.id, None).await?;

    let exams = class_exams(db, student.class_id, Schedule::Upcoming, Some(DASHBOARD_EXAMS)).await?;
    let upcoming_exams = exam_views(db, exams).await?;

    let today = now.date_naive();
    let pending_fees = fee::Model::pending_for_student(db, user.id)
        .await?
        .iter()
        .map(|f| FeeView::new(f, today))
        .collect();

    let notifications = notification::Model::visible_to(
        db,
        &Viewer::from(&student),
        now,
        Some(DASHBOARD_NOTIFICATIONS),
    )
    .await?;

    let response = DashboardResponse {
        profile: ProfileSummary::new(&user, &student, class.as_ref(), department.as_ref()),
        attendance_percentage: attendance.percentage,
        upcoming_exams,
        pending_fees,
        notifications,
    };

    Ok(Json(ApiResponse::success(
        response,
        "Dashboard retrieved successfully",
    )))
}

#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    pub class_id: Option<i64>,
    pub days: Vec<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// GET /student/timetable
///
/// The weekly timetable of the student's class, monday to saturday, each day
/// ordered by slot start time. A student without a class gets six empty days
/// and a warning.
pub async fn get_timetable(
    State(state): State<AppState>,
    StudentContext { student, .. }: StudentContext,
) -> Result<impl IntoResponse, PortalError> {
    let Some(class_id) = student.class_id else {
        tracing::warn!(student = student.id, "Student has no class assigned");
        let response = TimetableResponse {
            class_id: None,
            days: timetable::empty_week(),
            warning: Some(NO_CLASS_WARNING.to_string()),
        };
        return Ok(Json(ApiResponse::success(response, NO_CLASS_WARNING)));
    };

    let days = timetable::Model::weekly_for_class(state.db(), class_id).await?;
    Ok(Json(ApiResponse::success(
        TimetableResponse {
            class_id: Some(class_id),
            days,
            warning: None,
        },
        "Timetable retrieved successfully",
    )))
}

#[derive(Debug, Serialize)]
pub struct AttendanceResponse {
    pub overall: AttendanceSummary,
    pub subjects: Vec<SubjectAttendance>,
    pub records: Vec<AttendanceRecordView>,
}

/// GET /student/attendance
///
/// Every attendance record of the caller (most recent first) plus a summary
/// for each subject of their class.
pub async fn get_attendance(
    State(state): State<AppState>,
    StudentContext { user, student }: StudentContext,
) -> Result<impl IntoResponse, PortalError> {
    let db = state.db();

    let records = attendance::Model::for_student(db, user.id).await?;
    let subject_ids: Vec<i64> = records.iter().map(|r| r.subject_id).collect();
    let labels: HashMap<i64, CourseLabel> = subject::Model::course_labels(db, &subject_ids).await?;

    let mut subjects = Vec::new();
    if let Some(class_id) = student.class_id {
        for (subject, course) in subject::Model::for_class(db, class_id).await? {
            let summary = attendance::Model::summary(db, user.id, Some(subject.id)).await?;
            subjects.push(SubjectAttendance {
                subject_id: subject.id,
                course_code: course.code,
                course_name: course.name,
                summary,
            });
        }
    }

    let response = AttendanceResponse {
        overall: AttendanceSummary::from_records(&records),
        subjects,
        records: records
            .into_iter()
            .map(|r| AttendanceRecordView::new(r, &labels))
            .collect(),
    };

    Ok(Json(ApiResponse::success(
        response,
        "Attendance retrieved successfully",
    )))
}

#[derive(Debug, Serialize)]
pub struct ExamsResponse {
    pub upcoming: Vec<ExamView>,
    pub past: Vec<ExamView>,
}

/// GET /student/exams
///
/// Upcoming exams (soonest first) and past exams (most recent first) of the
/// caller's class.
pub async fn get_exams(
    State(state): State<AppState>,
    StudentContext { student, .. }: StudentContext,
) -> Result<impl IntoResponse, PortalError> {
    let db = state.db();
    let upcoming = class_exams(db, student.class_id, Schedule::Upcoming, None).await?;
    let past = class_exams(db, student.class_id, Schedule::Past, None).await?;

    Ok(Json(ApiResponse::success(
        ExamsResponse {
            upcoming: exam_views(db, upcoming).await?,
            past: exam_views(db, past).await?,
        },
        "Exams retrieved successfully",
    )))
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ResultView>,
    pub overall_percentage: f64,
}

/// GET /student/results
///
/// Published results only, most recent exam first.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "results": [
///       {
///         "exam_name": "Midterm",
///         "marks_obtained": 45,
///         "total_marks": 50,
///         "grade": "A+",
///         "passed": true
///       }
///     ],
///     "overall_percentage": 90.0
///   },
///   "message": "Results retrieved successfully"
/// }
/// ```
pub async fn get_results(
    State(state): State<AppState>,
    StudentContext { user, .. }: StudentContext,
) -> Result<impl IntoResponse, PortalError> {
    let rows = exam_result::Model::published_for_student(state.db(), user.id).await?;

    let response = ResultsResponse {
        overall_percentage: exam_result::overall_percentage(&rows),
        results: rows
            .iter()
            .map(|(result, exam)| ResultView::new(result, exam))
            .collect(),
    };

    Ok(Json(ApiResponse::success(
        response,
        "Results retrieved successfully",
    )))
}

#[derive(Debug, Serialize)]
pub struct FeesResponse {
    pub fees: Vec<FeeView>,
    pub pending: Vec<FeeView>,
    pub paid: Vec<FeeView>,
    pub total_pending: Decimal,
    pub total_paid: Decimal,
}

/// GET /student/fees
///
/// All fees (newest first) with their overdue flag, split into pending and
/// paid with totals.
pub async fn get_fees(
    State(state): State<AppState>,
    StudentContext { user, .. }: StudentContext,
) -> Result<impl IntoResponse, PortalError> {
    let fees = fee::Model::for_student(state.db(), user.id).await?;
    let today = Utc::now().date_naive();

    let (pending, paid): (Vec<&fee::Model>, Vec<&fee::Model>) = (
        fees.iter().filter(|f| f.is_pending()).collect(),
        fees.iter()
            .filter(|f| f.payment_status == PaymentStatus::Paid)
            .collect(),
    );

    let response = FeesResponse {
        total_pending: fee::total_amount(pending.iter().copied()),
        total_paid: fee::total_amount(paid.iter().copied()),
        pending: pending.iter().map(|f| FeeView::new(f, today)).collect(),
        paid: paid.iter().map(|f| FeeView::new(f, today)).collect(),
        fees: fees.iter().map(|f| FeeView::new(f, today)).collect(),
    };

    Ok(Json(ApiResponse::success(response, "Fees retrieved successfully")))
}

/// GET /student/notifications
///
/// Notifications addressed to everyone, the caller's class, their department
/// or them personally. Expired ones are left out.
pub async fn get_notifications(
    State(state): State<AppState>,
    StudentContext { student, .. }: StudentContext,
) -> Result<impl IntoResponse, PortalError> {
    let notifications =
        notification::Model::visible_to(state.db(), &Viewer::from(&student), Utc::now(), None)
            .await?;

    Ok(Json(ApiResponse::success(
        notifications,
        "Notifications retrieved successfully",
    )))
}

//! Response shapes of the student portal.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use db::grade::Grade;
use db::models::{
    attendance::{self, AttendanceSummary},
    class, department,
    exam::{self, ExamType},
    exam_result,
    fee::{self, FeeType, PaymentStatus},
    student,
    subject::CourseLabel,
    user,
};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub roll_number: String,
    pub admission_number: String,
    pub admission_date: NaiveDate,
    pub class_id: Option<i64>,
    pub class_name: Option<String>,
    pub department_id: i64,
    pub department_name: Option<String>,
}

impl ProfileSummary {
    pub fn new(
        user: &user::Model,
        student: &student::Model,
        class: Option<&class::Model>,
        department: Option<&department::Model>,
    ) -> Self {
        Self {
            id: student.id,
            username: user.username.clone(),
            full_name: user.full_name(),
            email: user.email.clone(),
            roll_number: student.roll_number.clone(),
            admission_number: student.admission_number.clone(),
            admission_date: student.admission_date,
            class_id: student.class_id,
            class_name: class.map(|c| c.name.clone()),
            department_id: student.department_id,
            department_name: department.map(|d| d.name.clone()),
        }
    }
}

/// Course labels are looked up per subject and may be absent if the subject
/// row vanished between queries.
fn label_parts(label: Option<&CourseLabel>) -> (String, String) {
    label
        .map(|l| (l.code.clone(), l.name.clone()))
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct ExamView {
    pub id: i64,
    pub name: String,
    pub exam_type: ExamType,
    pub subject_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub total_marks: i32,
    pub pass_marks: i32,
    pub instructions: String,
}

impl ExamView {
    pub fn new(exam: exam::Model, labels: &HashMap<i64, CourseLabel>) -> Self {
        let (course_code, course_name) = label_parts(labels.get(&exam.subject_id));
        Self {
            id: exam.id,
            name: exam.name,
            exam_type: exam.exam_type,
            subject_id: exam.subject_id,
            course_code,
            course_name,
            date: exam.date,
            duration_minutes: exam.duration_minutes,
            total_marks: exam.total_marks,
            pass_marks: exam.pass_marks,
            instructions: exam.instructions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeeView {
    pub id: i64,
    pub fee_type: FeeType,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: String,
    pub transaction_id: String,
    pub remarks: String,
    pub academic_year: String,
    pub semester: i32,
    pub is_overdue: bool,
}

impl FeeView {
    pub fn new(fee: &fee::Model, today: NaiveDate) -> Self {
        Self {
            id: fee.id,
            fee_type: fee.fee_type,
            amount: fee.amount(),
            due_date: fee.due_date,
            payment_status: fee.payment_status,
            payment_date: fee.payment_date,
            payment_method: fee.payment_method.clone(),
            transaction_id: fee.transaction_id.clone(),
            remarks: fee.remarks.clone(),
            academic_year: fee.academic_year.clone(),
            semester: fee.semester,
            is_overdue: fee.is_overdue_on(today),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultView {
    pub id: i64,
    pub exam_id: i64,
    pub exam_name: String,
    pub exam_type: ExamType,
    pub exam_date: DateTime<Utc>,
    pub marks_obtained: Option<i32>,
    pub total_marks: i32,
    pub pass_marks: i32,
    pub grade: Option<Grade>,
    /// `None` until marks are entered.
    pub passed: Option<bool>,
    pub remarks: String,
}

impl ResultView {
    pub fn new(result: &exam_result::Model, exam: &exam::Model) -> Self {
        Self {
            id: result.id,
            exam_id: exam.id,
            exam_name: exam.name.clone(),
            exam_type: exam.exam_type,
            exam_date: exam.date,
            marks_obtained: result.marks_obtained,
            total_marks: exam.total_marks,
            pass_marks: exam.pass_marks,
            grade: result.grade,
            passed: result.passed(exam.pass_marks),
            remarks: result.remarks.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AttendanceRecordView {
    pub id: i64,
    pub date: NaiveDate,
    pub is_present: bool,
    pub remarks: String,
    pub subject_id: i64,
    pub course_code: String,
    pub course_name: String,
}

impl AttendanceRecordView {
    pub fn new(record: attendance::Model, labels: &HashMap<i64, CourseLabel>) -> Self {
        let (course_code, course_name) = label_parts(labels.get(&record.subject_id));
        Self {
            id: record.id,
            date: record.date,
            is_present: record.is_present,
            remarks: record.remarks,
            subject_id: record.subject_id,
            course_code,
            course_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubjectAttendance {
    pub subject_id: i64,
    pub course_code: String,
    pub course_name: String,
    #[serde(flatten)]
    pub summary: AttendanceSummary,
}

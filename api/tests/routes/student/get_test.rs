use axum::http::{Method, StatusCode};
use chrono::{Duration, NaiveTime, Utc};
use db::models::{
    attendance,
    exam::{self, ExamType, NewExam},
    exam_result,
    fee::{self, FeeType, NewFee, PaymentStatus, PaymentUpdate},
    notification::{self, Audience, NewNotification},
    time_slot::{self, Day},
    timetable,
};
use serial_test::serial;

use crate::helpers::{Campus, bearer, date, make_test_app, seed_campus, send, unassigned_student};

fn exam_on(campus: &Campus, name: &str, offset: Duration, total: i32) -> NewExam {
    NewExam {
        name: name.into(),
        exam_type: ExamType::Midterm,
        subject_id: campus.subject.id,
        date: Utc::now() + offset,
        duration_minutes: 90,
        total_marks: total,
        pass_marks: total * 2 / 5,
        instructions: String::new(),
        created_by: Some(campus.admin.id),
    }
}

fn fee_due(campus: &Campus, amount: &str, due_in_days: i64) -> NewFee {
    NewFee {
        student_id: campus.student_user.id,
        fee_type: FeeType::Tuition,
        amount: amount.parse().unwrap(),
        due_date: Utc::now().date_naive() + Duration::days(due_in_days),
        academic_year: "2024-2025".into(),
        semester: 1,
        remarks: String::new(),
    }
}

fn time(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

#[tokio::test]
#[serial]
async fn dashboard_summarises_the_student() {
    let campus = seed_campus().await;
    let db = &campus.db;

    exam::Model::create(db, exam_on(&campus, "Upcoming", Duration::days(2), 50))
        .await
        .unwrap();
    exam::Model::create(db, exam_on(&campus, "Finished", -Duration::days(2), 50))
        .await
        .unwrap();

    for (day, present) in [(2, true), (3, true), (4, false)] {
        attendance::Model::mark(
            db,
            campus.student_user.id,
            campus.subject.id,
            date(2024, 9, day),
            present,
            Some(campus.teacher_user.id),
            "",
        )
        .await
        .unwrap();
    }

    fee::Model::create(db, fee_due(&campus, "15000.00", -1)).await.unwrap();
    let paid = fee::Model::create(db, fee_due(&campus, "500.00", 10)).await.unwrap();
    fee::Model::update_payment(
        db,
        paid.id,
        PaymentUpdate {
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    notification::Model::create(
        db,
        NewNotification::broadcast("Welcome", "Term starts Monday", campus.admin.id),
    )
    .await
    .unwrap();
    let mut expired = NewNotification::broadcast("Old news", "Gone", campus.admin.id);
    expired.expires_at = Some(Utc::now() - Duration::hours(1));
    notification::Model::create(db, expired).await.unwrap();

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);
    let (status, json) =
        send(&app, Method::GET, "/api/student/dashboard", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["profile"]["roll_number"], "CS001");
    assert_eq!(data["profile"]["class_name"], "CS Semester 1 A");
    assert_eq!(data["profile"]["department_name"], "Computer Science");
    assert_eq!(data["attendance_percentage"], 66.7);

    let exams = data["upcoming_exams"].as_array().unwrap();
    assert_eq!(exams.len(), 1);
    assert_eq!(exams[0]["name"], "Upcoming");
    assert_eq!(exams[0]["course_code"], "CS101");

    let pending = data["pending_fees"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["amount"], "15000.00");
    assert_eq!(pending[0]["is_overdue"], true);

    let notifications = data["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["title"], "Welcome");
}

#[tokio::test]
#[serial]
async fn dashboard_caps_upcoming_exams_at_five() {
    let campus = seed_campus().await;
    for i in 1..=7 {
        exam::Model::create(
            &campus.db,
            exam_on(&campus, &format!("Quiz {i}"), Duration::days(i), 10),
        )
        .await
        .unwrap();
    }

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);
    let (_, json) = send(&app, Method::GET, "/api/student/dashboard", Some(&token), None).await;

    let exams = json["data"]["upcoming_exams"].as_array().unwrap();
    assert_eq!(exams.len(), 5);
    assert_eq!(exams[0]["name"], "Quiz 1");
    assert_eq!(exams[4]["name"], "Quiz 5");
}

#[tokio::test]
#[serial]
async fn timetable_is_grouped_by_weekday_and_start_time() {
    let campus = seed_campus().await;
    let db = &campus.db;

    let late = time_slot::Model::create(db, Day::Monday, time(10), time(11)).await.unwrap();
    let early = time_slot::Model::create(db, Day::Monday, time(8), time(9)).await.unwrap();
    let wednesday = time_slot::Model::create(db, Day::Wednesday, time(9), time(10))
        .await
        .unwrap();
    for (slot, room) in [(&late, "R2"), (&early, "R1"), (&wednesday, "R3")] {
        timetable::Model::create(db, campus.class.id, campus.subject.id, slot.id, room)
            .await
            .unwrap();
    }

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);
    let (status, json) =
        send(&app, Method::GET, "/api/student/timetable", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let days = json["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 6);
    assert_eq!(days[0]["day"], "monday");
    assert_eq!(days[0]["entries"][0]["room_number"], "R1");
    assert_eq!(days[0]["entries"][0]["start_time"], "08:00:00");
    assert_eq!(days[0]["entries"][1]["room_number"], "R2");
    assert_eq!(days[1]["entries"].as_array().unwrap().len(), 0);
    assert_eq!(days[2]["day"], "wednesday");
    assert_eq!(days[2]["entries"][0]["course_code"], "CS101");
    assert!(json["data"].get("warning").is_none());
}

#[tokio::test]
#[serial]
async fn timetable_warns_a_student_without_class() {
    let campus = seed_campus().await;
    let loner = unassigned_student(&campus, "loner", "CS099").await;

    let app = make_test_app(campus.db.clone());
    let token = bearer(&loner);
    let (status, json) =
        send(&app, Method::GET, "/api/student/timetable", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["warning"],
        "You are not assigned to any class. Please contact administrator."
    );
    let days = json["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 6);
    assert!(days.iter().all(|d| d["entries"].as_array().unwrap().is_empty()));
}

#[tokio::test]
#[serial]
async fn attendance_lists_records_and_subject_summaries() {
    let campus = seed_campus().await;
    for (day, present) in [(2, true), (5, false)] {
        attendance::Model::mark(
            &campus.db,
            campus.student_user.id,
            campus.subject.id,
            date(2024, 9, day),
            present,
            None,
            "",
        )
        .await
        .unwrap();
    }

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);
    let (status, json) =
        send(&app, Method::GET, "/api/student/attendance", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["records"][0]["date"], "2024-09-05");
    assert_eq!(data["records"][1]["date"], "2024-09-02");
    assert_eq!(data["overall"]["percentage"], 50.0);

    let subjects = data["subjects"].as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["course_code"], "CS101");
    assert_eq!(subjects[0]["total"], 2);
    assert_eq!(subjects[0]["present"], 1);
}

#[tokio::test]
#[serial]
async fn no_attendance_is_zero_percent() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);

    let (_, json) = send(&app, Method::GET, "/api/student/attendance", Some(&token), None).await;

    assert_eq!(json["data"]["overall"]["percentage"], 0.0);
    assert_eq!(json["data"]["subjects"][0]["percentage"], 0.0);
}

#[tokio::test]
#[serial]
async fn exams_split_into_upcoming_and_past() {
    let campus = seed_campus().await;
    for (name, days) in [("Later", 5), ("Sooner", 1), ("Recent", -1), ("Older", -10)] {
        exam::Model::create(&campus.db, exam_on(&campus, name, Duration::days(days), 100))
            .await
            .unwrap();
    }

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);
    let (_, json) = send(&app, Method::GET, "/api/student/exams", Some(&token), None).await;

    let upcoming = json["data"]["upcoming"].as_array().unwrap();
    let past = json["data"]["past"].as_array().unwrap();
    assert_eq!(upcoming[0]["name"], "Sooner");
    assert_eq!(upcoming[1]["name"], "Later");
    assert_eq!(past[0]["name"], "Recent");
    assert_eq!(past[1]["name"], "Older");
}

#[tokio::test]
#[serial]
async fn results_show_only_published_rows() {
    let campus = seed_campus().await;
    let db = &campus.db;
    let midterm = exam::Model::create(db, exam_on(&campus, "Midterm", -Duration::days(3), 50))
        .await
        .unwrap();
    let quiz = exam::Model::create(db, exam_on(&campus, "Quiz", -Duration::days(1), 20))
        .await
        .unwrap();

    exam_result::Model::create(db, campus.student_user.id, midterm.id, Some(45), "", true)
        .await
        .unwrap();
    exam_result::Model::create(db, campus.student_user.id, quiz.id, Some(2), "", false)
        .await
        .unwrap();

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);
    let (status, json) = send(&app, Method::GET, "/api/student/results", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["exam_name"], "Midterm");
    assert_eq!(results[0]["grade"], "A+");
    assert_eq!(results[0]["passed"], true);
    assert_eq!(json["data"]["overall_percentage"], 90.0);
}

#[tokio::test]
#[serial]
async fn fees_flag_overdue_and_total_by_status() {
    let campus = seed_campus().await;
    let db = &campus.db;
    fee::Model::create(db, fee_due(&campus, "1200.50", -3)).await.unwrap();
    fee::Model::create(db, fee_due(&campus, "300.00", 7)).await.unwrap();
    let settled = fee::Model::create(db, fee_due(&campus, "99.99", -30)).await.unwrap();
    fee::Model::update_payment(
        db,
        settled.id,
        PaymentUpdate {
            payment_status: Some(PaymentStatus::Paid),
            payment_date: Some(date(2024, 9, 1)),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);
    let (status, json) = send(&app, Method::GET, "/api/student/fees", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["fees"].as_array().unwrap().len(), 3);
    assert_eq!(data["pending"].as_array().unwrap().len(), 2);
    assert_eq!(data["paid"].as_array().unwrap().len(), 1);
    assert_eq!(data["total_pending"], "1500.50");
    assert_eq!(data["total_paid"], "99.99");

    let overdue: Vec<bool> = data["pending"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["is_overdue"].as_bool().unwrap())
        .collect();
    assert_eq!(overdue.iter().filter(|o| **o).count(), 1);
    assert_eq!(data["paid"][0]["is_overdue"], false);
}

#[tokio::test]
#[serial]
async fn notifications_follow_the_audience() {
    let campus = seed_campus().await;
    let db = &campus.db;
    let other = unassigned_student(&campus, "other", "CS050").await;

    let mut for_class = NewNotification::broadcast("Class trip", "Friday", campus.admin.id);
    for_class.target_audience = Audience::Class;
    for_class.target_class_id = Some(campus.class.id);
    notification::Model::create(db, for_class).await.unwrap();

    let mut personal = NewNotification::broadcast("See me", "Office", campus.admin.id);
    personal.target_audience = Audience::Individual;
    personal.target_student_id = Some(campus.student.id);
    notification::Model::create(db, personal).await.unwrap();

    let mut for_department = NewNotification::broadcast("Dept seminar", "Hall", campus.admin.id);
    for_department.target_audience = Audience::Department;
    for_department.target_department_id = Some(campus.department.id);
    notification::Model::create(db, for_department).await.unwrap();

    let app = make_test_app(campus.db.clone());

    let token = bearer(&campus.student_user);
    let (_, json) = send(&app, Method::GET, "/api/student/notifications", Some(&token), None).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let token = bearer(&other);
    let (_, json) = send(&app, Method::GET, "/api/student/notifications", Some(&token), None).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Dept seminar"]);
}

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use db::models::{
    exam::{self, ExamType, NewExam},
    exam_result,
};
use serde_json::json;
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn create_exam_rejects_pass_above_total() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);
    let mut body = json!({
        "name": "Midterm",
        "exam_type": "midterm",
        "subject_id": campus.subject.id,
        "date": "2030-03-01T09:00:00Z",
        "duration_minutes": 120,
        "total_marks": 50,
        "pass_marks": 60
    });

    let (status, json) =
        send(&app, Method::POST, "/api/admin/exams", Some(&token), Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("Pass marks cannot exceed total marks"));

    body["pass_marks"] = json!(20);
    let (status, json) =
        send(&app, Method::POST, "/api/admin/exams", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["created_by"], campus.admin.id);
}

#[tokio::test]
#[serial]
async fn changing_total_marks_regrades_results() {
    let campus = seed_campus().await;
    let exam = exam::Model::create(
        &campus.db,
        NewExam {
            name: "Final".into(),
            exam_type: ExamType::Final,
            subject_id: campus.subject.id,
            date: Utc::now() - Duration::days(1),
            duration_minutes: 180,
            total_marks: 50,
            pass_marks: 20,
            instructions: String::new(),
            created_by: None,
        },
    )
    .await
    .unwrap();
    let result = exam_result::Model::create(
        &campus.db,
        campus.student_user.id,
        exam.id,
        Some(45),
        "",
        true,
    )
    .await
    .unwrap();
    assert_eq!(result.grade.unwrap().to_string(), "A+");

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);
    let uri = format!("/api/admin/exams/{}/marks", exam.id);

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "total_marks": 100, "pass_marks": 120 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "total_marks": 100, "pass_marks": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total_marks"], 100);

    let token = bearer(&campus.student_user);
    let (_, json) = send(&app, Method::GET, "/api/student/results", Some(&token), None).await;
    assert_eq!(json["data"]["results"][0]["grade"], "C");
    assert_eq!(json["data"]["overall_percentage"], 45.0);
}

#[tokio::test]
#[serial]
async fn exam_marks_for_unknown_exam_is_not_found() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/admin/exams/4242/marks",
        Some(&token),
        Some(json!({ "total_marks": 100, "pass_marks": 40 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

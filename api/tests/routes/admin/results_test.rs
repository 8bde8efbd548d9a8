use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use db::models::{
    exam::{self, ExamType, NewExam},
    exam_result,
};
use serde_json::json;
use serial_test::serial;

use crate::helpers::{Campus, bearer, make_test_app, seed_campus, send};

async fn past_exam(campus: &Campus, name: &str) -> exam::Model {
    exam::Model::create(
        &campus.db,
        NewExam {
            name: name.into(),
            exam_type: ExamType::Quiz,
            subject_id: campus.subject.id,
            date: Utc::now() - Duration::days(2),
            duration_minutes: 30,
            total_marks: 50,
            pass_marks: 20,
            instructions: String::new(),
            created_by: Some(campus.admin.id),
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
#[serial]
async fn bulk_publish_makes_results_visible() {
    let campus = seed_campus().await;
    let first = past_exam(&campus, "Quiz 1").await;
    let second = past_exam(&campus, "Quiz 2").await;
    let a = exam_result::Model::create(
        &campus.db,
        campus.student_user.id,
        first.id,
        Some(40),
        "",
        false,
    )
    .await
    .unwrap();
    let b = exam_result::Model::create(
        &campus.db,
        campus.student_user.id,
        second.id,
        Some(10),
        "",
        false,
    )
    .await
    .unwrap();

    let app = make_test_app(campus.db.clone());
    let student = bearer(&campus.student_user);
    let (_, json) = send(&app, Method::GET, "/api/student/results", Some(&student), None).await;
    assert_eq!(json["data"]["results"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["overall_percentage"], 0.0);

    let admin = bearer(&campus.admin);
    let body = json!({ "ids": [a.id, b.id], "is_published": true });
    let (status, json) =
        send(&app, Method::PATCH, "/api/admin/results", Some(&admin), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["updated"], 2);
    assert_eq!(json["message"], "2 results updated");

    let (_, json) = send(&app, Method::GET, "/api/student/results", Some(&student), None).await;
    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(json["data"]["overall_percentage"], 50.0);

    let (_, json) = send(&app, Method::GET, "/api/admin/results?grade=F", Some(&admin), None).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["exam_id"], second.id);
}

#[tokio::test]
#[serial]
async fn bulk_publish_needs_ids() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = json!({ "ids": [], "is_published": true });
    let (status, json) =
        send(&app, Method::PATCH, "/api/admin/results", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("At least one id is required"));
}

#[tokio::test]
#[serial]
async fn updating_marks_regrades_and_single_publish_withdraws() {
    let campus = seed_campus().await;
    let quiz = past_exam(&campus, "Quiz").await;
    let result = exam_result::Model::create(
        &campus.db,
        campus.student_user.id,
        quiz.id,
        None,
        "",
        true,
    )
    .await
    .unwrap();
    assert!(result.grade.is_none());

    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let uri = format!("/api/admin/results/{}/marks", result.id);
    let (status, json) =
        send(&app, Method::PUT, &uri, Some(&token), Some(json!({ "marks_obtained": 30 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["grade"], "B");

    let uri = format!("/api/admin/results/{}", result.id);
    let (status, json) =
        send(&app, Method::PATCH, &uri, Some(&token), Some(json!({ "is_published": false }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["is_published"], false);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/admin/results/999",
        Some(&token),
        Some(json!({ "is_published": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn duplicate_result_for_same_exam_conflicts() {
    let campus = seed_campus().await;
    let quiz = past_exam(&campus, "Quiz").await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);
    let body = json!({
        "student_id": campus.student_user.id,
        "exam_id": quiz.id,
        "marks_obtained": 25
    });

    let (status, json) =
        send(&app, Method::POST, "/api/admin/results", Some(&token), Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["grade"], "C+");

    let (status, _) =
        send(&app, Method::POST, "/api/admin/results", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

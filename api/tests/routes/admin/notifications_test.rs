use axum::http::{Method, StatusCode};
use serde_json::json;
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn class_audience_needs_a_target_class() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = json!({
        "title": "Lab closed",
        "message": "No lab on Friday",
        "notification_type": "academic",
        "target_audience": "class"
    });
    let (status, json) =
        send(&app, Method::POST, "/api/admin/notifications", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("target_class_id"));
}

#[tokio::test]
#[serial]
async fn created_notification_reaches_the_class() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let admin = bearer(&campus.admin);

    let body = json!({
        "title": "Lab closed",
        "message": "No lab on Friday",
        "notification_type": "academic",
        "target_audience": "class",
        "target_class_id": campus.class.id,
        "is_urgent": true
    });
    let (status, json) =
        send(&app, Method::POST, "/api/admin/notifications", Some(&admin), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["created_by"], campus.admin.id);

    let (_, json) = send(
        &app,
        Method::GET,
        "/api/admin/notifications?is_urgent=true",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(json["data"]["total"], 1);

    let student = bearer(&campus.student_user);
    let (_, json) =
        send(&app, Method::GET, "/api/student/notifications", Some(&student), None).await;
    assert_eq!(json["data"][0]["title"], "Lab closed");
    assert_eq!(json["data"][0]["is_urgent"], true);
}

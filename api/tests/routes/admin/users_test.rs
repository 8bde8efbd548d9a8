use axum::http::{Method, StatusCode};
use serde_json::json;
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn list_users_filters_by_role() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let (status, json) =
        send(&app, Method::GET, "/api/admin/users?role=teacher", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["username"], "teacher1");
    assert_eq!(json["data"]["total"], 1);
    assert!(items[0].get("password_hash").is_none());
}

#[tokio::test]
#[serial]
async fn list_users_searches_and_clamps_page_size() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let (_, json) =
        send(&app, Method::GET, "/api/admin/users?per_page=500", Some(&token), None).await;
    assert_eq!(json["data"]["per_page"], 100);
    assert_eq!(json["data"]["total"], 3);
    let names: Vec<&str> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["admin", "student1", "teacher1"]);

    let (_, json) =
        send(&app, Method::GET, "/api/admin/users?query=student", Some(&token), None).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["username"], "student1");
}

#[tokio::test]
#[serial]
async fn create_user_then_reject_duplicate() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);
    let body = json!({
        "username": "teacher2",
        "email": "teacher2@college.edu",
        "first_name": "Ada",
        "last_name": "King",
        "password": "secret123",
        "role": "teacher"
    });

    let (status, json) =
        send(&app, Method::POST, "/api/admin/users", Some(&token), Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["role"], "teacher");
    assert_eq!(json["data"]["is_active"], true);

    let (status, json) =
        send(&app, Method::POST, "/api/admin/users", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["success"], false);
}

#[tokio::test]
#[serial]
async fn create_user_validates_fields() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);
    let body = json!({
        "username": "x",
        "email": "not-an-email",
        "password": "123",
        "role": "student"
    });

    let (status, json) =
        send(&app, Method::POST, "/api/admin/users", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Invalid email format"));
    assert!(message.contains("Password must be at least 6 characters"));
}

#[tokio::test]
#[serial]
async fn delete_user_refuses_self_and_unknown_ids() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let uri = format!("/api/admin/users/{}", campus.admin.id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, "/api/admin/users/9999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/admin/users/{}", campus.teacher_user.id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) =
        send(&app, Method::GET, "/api/admin/users?role=teacher", Some(&token), None).await;
    assert_eq!(json["data"]["total"], 0);
}

#[tokio::test]
#[serial]
async fn list_users_far_page_is_empty() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let (status, json) = send(
        &app,
        Method::GET,
        "/api/admin/users?page=18446744073709551615",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["total"], 3);
}

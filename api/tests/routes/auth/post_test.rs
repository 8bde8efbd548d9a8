use axum::http::{Method, StatusCode};
use db::models::user;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::json;
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn login_returns_token_and_portal() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": "student1", "password": "student123"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["username"], "student1");
    assert_eq!(data["role"], "student");
    assert_eq!(data["portal"], "/api/student/dashboard");
    assert!(data["token"].as_str().is_some());
    assert!(data["expires_at"].as_str().is_some());
}

#[tokio::test]
#[serial]
async fn issued_token_opens_the_portal() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let (_, json) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": "admin", "password": "admin123"})),
    )
    .await;
    assert_eq!(json["data"]["portal"], "/api/admin/dashboard");

    let token = format!("Bearer {}", json["data"]["token"].as_str().unwrap());
    let (status, _) = send(&app, Method::GET, "/api/admin/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn wrong_password_is_rejected_without_redirect() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": "student1", "password": "nope"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid username or password.");
    assert!(json.get("redirect").is_none());
}

#[tokio::test]
#[serial]
async fn inactive_account_cannot_log_in() {
    let campus = seed_campus().await;
    let mut active: user::ActiveModel = campus.student_user.clone().into();
    active.is_active = Set(false);
    active.update(&campus.db).await.unwrap();
    let app = make_test_app(campus.db.clone());

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": "student1", "password": "student123"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid username or password.");
}

#[tokio::test]
#[serial]
async fn blank_credentials_fail_validation() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"username": "", "password": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("Username is required")
    );
}

#[tokio::test]
#[serial]
async fn logout_requires_a_token() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let (status, _) = send(&app, Method::POST, "/api/auth/logout", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = bearer(&campus.student_user);
    let (status, json) = send(&app, Method::POST, "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "You have been successfully logged out.");
}

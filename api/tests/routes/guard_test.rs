use axum::http::{Method, StatusCode};
use db::models::user::{self, Role};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn missing_token_is_unauthenticated_without_redirect() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let (status, json) = send(&app, Method::GET, "/api/student/dashboard", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
    assert!(json.get("redirect").is_none());
}

#[tokio::test]
#[serial]
async fn garbage_token_is_unauthenticated() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let (status, json) = send(
        &app,
        Method::GET,
        "/api/student/dashboard",
        Some("Bearer not-a-jwt"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid or expired token");
}

#[tokio::test]
#[serial]
async fn teacher_on_student_portal_is_forbidden_with_redirect() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.teacher_user);

    let (status, json) =
        send(&app, Method::GET, "/api/student/dashboard", Some(&token), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        json["message"],
        "You don't have permission to access this page."
    );
    assert_eq!(json["redirect"], "/api/auth/login");
}

#[tokio::test]
#[serial]
async fn student_on_admin_interface_is_forbidden() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);

    let (status, json) = send(&app, Method::GET, "/api/admin/users", Some(&token), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["redirect"], "/api/auth/login");
}

#[tokio::test]
#[serial]
async fn student_without_profile_is_sent_back_to_login() {
    let campus = seed_campus().await;
    let orphan = user::Model::create(
        &campus.db,
        "orphan",
        "orphan@college.edu",
        "",
        "",
        "password123",
        Role::Student,
    )
    .await
    .unwrap();
    let app = make_test_app(campus.db.clone());
    let token = bearer(&orphan);

    let (status, json) =
        send(&app, Method::GET, "/api/student/dashboard", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["message"],
        "Student profile not found. Please contact administrator."
    );
    assert_eq!(json["redirect"], "/api/auth/login");
}

#[tokio::test]
#[serial]
async fn teacher_without_profile_gets_teacher_variant() {
    let campus = seed_campus().await;
    let newcomer = user::Model::create(
        &campus.db,
        "newteacher",
        "newteacher@college.edu",
        "",
        "",
        "password123",
        Role::Teacher,
    )
    .await
    .unwrap();
    let app = make_test_app(campus.db.clone());
    let token = bearer(&newcomer);

    let (status, json) =
        send(&app, Method::GET, "/api/teacher/dashboard", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["message"],
        "Teacher profile not found. Please contact administrator."
    );
    assert_eq!(json["redirect"], "/api/auth/login");
}

#[tokio::test]
#[serial]
async fn deleted_admin_token_no_longer_opens_admin_interface() {
    let campus = seed_campus().await;
    let departed = user::Model::create(
        &campus.db,
        "admin2",
        "admin2@college.edu",
        "",
        "",
        "password123",
        Role::Admin,
    )
    .await
    .unwrap();
    let app = make_test_app(campus.db.clone());
    let token = bearer(&departed);

    let (status, _) = send(&app, Method::GET, "/api/admin/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    user::Entity::delete_by_id(departed.id)
        .exec(&campus.db)
        .await
        .unwrap();

    let (status, json) = send(&app, Method::GET, "/api/admin/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Account no longer exists");
    assert!(json.get("redirect").is_none());
}

#[tokio::test]
#[serial]
async fn deactivated_student_loses_portal_access() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);

    let mut active: user::ActiveModel = campus.student_user.clone().into();
    active.is_active = Set(false);
    active.update(&campus.db).await.unwrap();

    let (status, json) =
        send(&app, Method::GET, "/api/student/dashboard", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Account is inactive");
}

#[tokio::test]
#[serial]
async fn deactivated_teacher_loses_portal_access() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.teacher_user);

    let mut active: user::ActiveModel = campus.teacher_user.clone().into();
    active.is_active = Set(false);
    active.update(&campus.db).await.unwrap();

    let (status, _) =
        send(&app, Method::GET, "/api/teacher/dashboard", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

use axum::http::{Method, StatusCode};
use db::models::user;
use sea_orm::EntityTrait;
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn me_returns_the_account_without_password() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.student_user);

    let (status, json) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["username"], "student1");
    assert_eq!(json["data"]["full_name"], "Jane Smith");
    assert!(json["data"].get("password_hash").is_none());
}

#[tokio::test]
#[serial]
async fn me_for_deleted_account_is_not_found() {
    let campus = seed_campus().await;
    let token = bearer(&campus.teacher_user);
    user::Entity::delete_by_id(campus.teacher_user.id)
        .exec(&campus.db)
        .await
        .unwrap();
    let app = make_test_app(campus.db.clone());

    let (status, _) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn dashboard_points_at_the_role_portal() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    for (account, portal) in [
        (&campus.admin, "/api/admin/dashboard"),
        (&campus.teacher_user, "/api/teacher/dashboard"),
        (&campus.student_user, "/api/student/dashboard"),
    ] {
        let token = bearer(account);
        let (status, json) =
            send(&app, Method::GET, "/api/auth/dashboard", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["portal"], portal);
    }
}

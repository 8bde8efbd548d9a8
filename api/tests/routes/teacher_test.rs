use axum::http::{Method, StatusCode};
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn teacher_dashboard_summarises_the_caller() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.teacher_user);

    let (status, json) =
        send(&app, Method::GET, "/api/teacher/dashboard", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["employee_id"], "EMP001");
    assert_eq!(json["data"]["full_name"], "John Doe");
    assert_eq!(json["data"]["qualification"], "master");
}

#[tokio::test]
#[serial]
async fn admin_dashboard_is_admin_only() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());

    let admin = bearer(&campus.admin);
    let (status, json) = send(&app, Method::GET, "/api/admin/dashboard", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["username"], "admin");

    let teacher = bearer(&campus.teacher_user);
    let (status, _) = send(&app, Method::GET, "/api/admin/dashboard", Some(&teacher), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

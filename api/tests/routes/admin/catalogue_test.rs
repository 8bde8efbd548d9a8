use axum::http::{Method, StatusCode};
use serde_json::json;
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

#[tokio::test]
#[serial]
async fn create_department_requires_a_code() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = json!({ "name": "Mathematics", "code": "" });
    let (status, json) =
        send(&app, Method::POST, "/api/admin/departments", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("Code must be 1 to 10 characters"));

    let body = json!({ "name": "Mathematics", "code": "MATH" });
    let (status, json) =
        send(&app, Method::POST, "/api/admin/departments", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["code"], "MATH");

    let (_, json) = send(&app, Method::GET, "/api/admin/departments", Some(&token), None).await;
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["items"][0]["name"], "Computer Science");
}

#[tokio::test]
#[serial]
async fn deleting_a_department_removes_its_courses() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let (status, _) =
        send(&app, Method::DELETE, "/api/admin/departments/9999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/admin/departments/{}", campus.department.id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&app, Method::GET, "/api/admin/courses", Some(&token), None).await;
    assert_eq!(json["data"]["total"], 0);
}

#[tokio::test]
#[serial]
async fn time_slots_are_listed_in_weekday_order() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    for (day, start, end) in [
        ("tuesday", "09:00:00", "10:00:00"),
        ("monday", "11:00:00", "12:00:00"),
        ("monday", "09:00:00", "10:00:00"),
    ] {
        let body = json!({ "day": day, "start_time": start, "end_time": end });
        let (status, _) =
            send(&app, Method::POST, "/api/admin/time-slots", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, json) = send(&app, Method::GET, "/api/admin/time-slots", Some(&token), None).await;
    let slots: Vec<(String, String)> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["day"].as_str().unwrap().to_owned(),
                s["start_time"].as_str().unwrap().to_owned(),
            )
        })
        .collect();
    assert_eq!(
        slots,
        vec![
            ("monday".to_owned(), "09:00:00".to_owned()),
            ("monday".to_owned(), "11:00:00".to_owned()),
            ("tuesday".to_owned(), "09:00:00".to_owned()),
        ]
    );

    let (_, json) =
        send(&app, Method::GET, "/api/admin/time-slots?day=tuesday", Some(&token), None).await;
    assert_eq!(json["data"]["total"], 1);
}

#[tokio::test]
#[serial]
async fn backwards_time_slot_is_rejected() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = json!({ "day": "friday", "start_time": "10:00:00", "end_time": "09:00:00" });
    let (status, _) =
        send(&app, Method::POST, "/api/admin/time-slots", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn teacher_listing_hides_salary() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let (status, json) =
        send(&app, Method::GET, "/api/admin/teachers?query=EMP", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let teacher = &json["data"]["items"][0];
    assert_eq!(teacher["employee_id"], "EMP001");
    assert!(teacher.get("salary_cents").is_none());
}

#[tokio::test]
#[serial]
async fn student_profile_requires_a_student_account() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = json!({
        "user_id": campus.teacher_user.id,
        "roll_number": "CS002",
        "admission_number": "ADM2024002",
        "department_id": campus.department.id,
        "admission_date": "2024-01-01",
        "guardian_name": "Someone",
        "guardian_phone": "555",
        "emergency_contact": "555"
    });
    let (status, _) =
        send(&app, Method::POST, "/api/admin/students", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) =
        send(&app, Method::GET, "/api/admin/students?query=CS001", Some(&token), None).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["admission_number"], "ADM2024001");
}

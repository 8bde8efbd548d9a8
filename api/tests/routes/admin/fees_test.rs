use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;
use serial_test::serial;

use crate::helpers::{bearer, make_test_app, seed_campus, send};

fn fee_body(student_id: i64, amount: &str, due_in_days: i64) -> serde_json::Value {
    let due = Utc::now().date_naive() + Duration::days(due_in_days);
    json!({
        "student_id": student_id,
        "fee_type": "tuition",
        "amount": amount,
        "due_date": due.to_string(),
        "academic_year": "2024-2025",
        "semester": 1
    })
}

#[tokio::test]
#[serial]
async fn create_fee_reports_amount_and_overdue_flag() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = fee_body(campus.student_user.id, "15000.00", -1);
    let (status, json) =
        send(&app, Method::POST, "/api/admin/fees", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["amount"], "15000.00");
    assert_eq!(json["data"]["payment_status"], "pending");
    assert_eq!(json["data"]["is_overdue"], true);
}

#[tokio::test]
#[serial]
async fn fee_amount_with_fractional_cents_is_rejected() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = fee_body(campus.student_user.id, "10.005", 5);
    let (status, _) = send(&app, Method::POST, "/api/admin/fees", Some(&token), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn recording_a_payment_clears_overdue() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let token = bearer(&campus.admin);

    let body = fee_body(campus.student_user.id, "250.00", -10);
    let (_, json) = send(&app, Method::POST, "/api/admin/fees", Some(&token), Some(body)).await;
    let fee_id = json["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/admin/fees/{fee_id}");
    let update = json!({
        "payment_status": "paid",
        "payment_date": "2024-10-01",
        "payment_method": "bank transfer",
        "transaction_id": "TXN-0001"
    });
    let (status, json) = send(&app, Method::PATCH, &uri, Some(&token), Some(update)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["payment_status"], "paid");
    assert_eq!(json["data"]["payment_date"], "2024-10-01");
    assert_eq!(json["data"]["is_overdue"], false);

    let (_, json) =
        send(&app, Method::GET, "/api/admin/fees?query=TXN-0001", Some(&token), None).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], fee_id);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/admin/fees/9999",
        Some(&token),
        Some(json!({ "payment_status": "paid" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn bulk_status_update_reaches_the_student() {
    let campus = seed_campus().await;
    let app = make_test_app(campus.db.clone());
    let admin = bearer(&campus.admin);

    let mut ids = Vec::new();
    for amount in ["100.00", "200.00"] {
        let body = fee_body(campus.student_user.id, amount, 3);
        let (_, json) = send(&app, Method::POST, "/api/admin/fees", Some(&admin), Some(body)).await;
        ids.push(json["data"]["id"].as_i64().unwrap());
    }

    let body = json!({ "ids": ids, "payment_status": "paid" });
    let (status, json) =
        send(&app, Method::PATCH, "/api/admin/fees", Some(&admin), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["updated"], 2);
    assert_eq!(json["message"], "2 fees updated");

    let (_, json) =
        send(&app, Method::GET, "/api/admin/fees?payment_status=paid", Some(&admin), None).await;
    assert_eq!(json["data"]["total"], 2);

    let student = bearer(&campus.student_user);
    let (_, json) = send(&app, Method::GET, "/api/student/fees", Some(&student), None).await;
    assert_eq!(json["data"]["total_paid"], "300.00");
    assert_eq!(json["data"]["pending"].as_array().unwrap().len(), 0);
}

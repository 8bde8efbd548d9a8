use axum::http::{Method, StatusCode};
use db::test_utils::setup_test_db;
use serial_test::serial;

use crate::helpers::{make_test_app, send};

#[tokio::test]
#[serial]
async fn health_is_public() {
    let app = make_test_app(setup_test_db().await);
    let (status, json) = send(&app, Method::GET, "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
}

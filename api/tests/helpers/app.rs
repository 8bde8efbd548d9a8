use api::auth::{generate_jwt, middleware::log_request};
use api::routes::routes;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
    middleware::from_fn,
    response::Response,
};
use db::models::user;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use util::{config::AppConfig, state::AppState};

pub const TEST_SECRET: &str = "test-secret";

pub fn make_test_app(db: DatabaseConnection) -> Router {
    AppConfig::set_jwt_secret(TEST_SECRET);
    Router::new()
        .nest("/api", routes(AppState::new(db)))
        .layer(from_fn(log_request))
}

/// `Authorization` header value for `user`.
pub fn bearer(user: &user::Model) -> String {
    AppConfig::set_jwt_secret(TEST_SECRET);
    let (token, _) = generate_jwt(user.id, user.role).unwrap();
    format!("Bearer {token}")
}

async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Sends one request through a clone of `app`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    let req = match body {
        Some(payload) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    (status, get_json_body(response).await)
}

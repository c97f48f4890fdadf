#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use scholar_api::auth::jwt::JwtConfig;
use scholar_api::config::ServerConfig;
use scholar_api::router::build_app_router;
use scholar_api::state::AppState;
use scholar_events::NotificationMailer;

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Test `ServerConfig` with a fixed signing secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_days: 30,
        },
    }
}

/// The production router over the given pool, with email in log-only mode.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        mailer: Arc::new(NotificationMailer::log_only()),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// A registered account as seen by tests.
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub id: i64,
    pub token: String,
}

/// Register through the API and return the new account's id and token.
pub async fn register(app: &Router, name: &str, email: &str, role: &str) -> TestAccount {
    let body = json!({
        "name": name,
        "email": email,
        "password": TEST_PASSWORD,
        "role": role,
    });
    let response = post_json(app.clone(), "/api/users", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    TestAccount {
        id: json["id"].as_i64().unwrap(),
        token: json["token"].as_str().unwrap().to_string(),
    }
}

pub async fn register_admin(app: &Router, name: &str) -> TestAccount {
    register(app, name, &format!("{name}@college.edu"), "admin").await
}

pub async fn register_student(app: &Router, name: &str) -> TestAccount {
    register(app, name, &format!("{name}@college.edu"), "student").await
}

/// Assign a target through the admin API and return its id.
pub async fn assign_target(app: &Router, admin: &TestAccount, student_id: i64, semester: i32, title: &str) -> i64 {
    let body = json!({
        "studentId": student_id,
        "semester": semester,
        "title": title,
    });
    let response = post_json_auth(app.clone(), "/api/admin/targets", body, &admin.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

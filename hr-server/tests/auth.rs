mod common;

use common::TestApp;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn protected_routes_require_token() {
    let app = TestApp::new().await;

    let (status, body) = app.request(Method::GET, "/api/employees", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);
    assert_eq!(body["message"], "No token, authorization denied");

    let (status, body) = app.get("/api/leaves", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token is not valid");

    let (status, _) = app.get("/api/payroll/history", "").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new().await;
    let (status, body) = app.request(Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn register_login_me() {
    let app = TestApp::new().await;
    app.register("grace", "grace@example.com").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"username": "grace", "password": "correct-horse"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "grace");
    assert_eq!(body["user"]["role"], "hr");
    assert!(body["user"].get("hashPass").is_none());
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "grace@example.com", "password": "correct-horse"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, me) = app.get("/api/auth/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "grace@example.com");
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_user() {
    let app = TestApp::new().await;
    app.register("grace", "grace@example.com").await;

    for body in [
        json!({"username": "grace", "password": "wrong-password"}),
        json!({"username": "nobody", "password": "correct-horse"}),
    ] {
        let (status, resp) = app
            .request(Method::POST, "/api/auth/login", None, Some(body))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(resp["code"], 1002);
    }
}

#[tokio::test]
async fn register_validation_and_conflicts() {
    let app = TestApp::new().await;
    app.register("grace", "grace@example.com").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"username": "grace", "email": "other@example.com", "password": "long-enough"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 1006);

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"username": "other", "email": "grace@example.com", "password": "long-enough"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 1007);

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"username": "short", "email": "s@example.com", "password": "1234"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1005);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::new().await;
    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        http::Request::builder()
            .uri("/api/health")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn rejected_requests_keep_cors_and_request_id_headers() {
    let app = TestApp::new().await;
    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        http::Request::builder()
            .uri("/api/employees")
            .header(http::header::ORIGIN, "http://localhost:5173")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), http::StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert!(response.headers().contains_key("x-request-id"));
}

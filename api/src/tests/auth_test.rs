use super::*;
use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

#[tokio::test]
#[serial]
async fn health_endpoint_is_public() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
#[serial]
async fn register_login_and_me_round_trip() {
    let (app, _db) = test_app().await;

    let register_body = json!({
        "name": "Nomsa",
        "email": "nomsa@example.com",
        "mobile": "0821234567",
        "password": "a-long-password",
        "role": "customer"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/register", register_body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["data"]["role"], "customer");
    assert_eq!(body["data"]["active"], true);

    // Duplicate registration conflicts.
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/register", register_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "identifier": "nomsa@example.com", "password": "a-long-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let token = body["data"]["token"].as_str().unwrap().to_owned();
    assert!(!token.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["email"], "nomsa@example.com");
}

#[tokio::test]
#[serial]
async fn registration_validation_failures_return_400() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({
                "name": "Short",
                "email": "not-an-email",
                "mobile": "082",
                "password": "short",
                "role": "customer"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[serial]
async fn admin_role_is_rejected_at_registration() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({
                "name": "Opportunist",
                "email": "opportunist@example.com",
                "mobile": "0820000001",
                "password": "a-long-password",
                "role": "admin"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[serial]
async fn wrong_credentials_do_not_reveal_the_failing_factor() {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({
                "name": "Thabo",
                "email": "thabo@example.com",
                "mobile": "0837654321",
                "password": "a-long-password",
                "role": "customer"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "identifier": "thabo@example.com", "password": "wrong" }),
        ))
        .await
        .unwrap();
    let unknown_user = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "identifier": "ghost@example.com", "password": "a-long-password" }),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::FORBIDDEN);
    assert_eq!(unknown_user.status(), StatusCode::FORBIDDEN);
    let first = response_json(wrong_password).await;
    let second = response_json(unknown_user).await;
    assert_eq!(first["message"], second["message"]);
}

#[tokio::test]
#[serial]
async fn protected_routes_require_a_token() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

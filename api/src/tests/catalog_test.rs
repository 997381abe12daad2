use super::*;
use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

async fn login(app: &Router, identifier: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "identifier": identifier, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    body["data"]["token"].as_str().unwrap().to_owned()
}

#[tokio::test]
#[serial]
async fn taxonomy_management_over_http() {
    let (app, db) = test_app().await;
    seed_admin(&db).await;
    let admin_token = login(&app, "admin@example.com", "admin-password").await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/api/catalog/menu-categories",
            &admin_token,
            json!({ "name": "Starters" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let category_id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/api/catalog/menu-subcategories",
            &admin_token,
            json!({ "name": "Soups", "category_ids": [category_id] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Reads are public.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/catalog/menu-categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"][0]["name"], "Starters");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/api/catalog/menu-categories/{category_id}/subcategories"
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"][0]["name"], "Soups");

    // Writes are admin-only.
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/catalog/menu-categories",
            json!({ "name": "Sneaky" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn partner_directory_lists_only_approved_partners() {
    let (app, db) = test_app().await;
    seed_admin(&db).await;
    let admin_token = login(&app, "admin@example.com", "admin-password").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({
                "name": "Chef Sipho",
                "email": "sipho@example.com",
                "mobile": "0825550001",
                "password": "a-long-password",
                "role": "chef",
                "chef_details": {
                    "age": 31,
                    "experience_years": 7,
                    "cooking_styles": "shisa nyama"
                }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let chef_id = body["data"]["id"].as_i64().unwrap();

    // Pending partners are invisible to customers.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/catalog/chefs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            &format!("/api/approvals/approve/{chef_id}"),
            &admin_token,
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/catalog/chefs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response_json(response).await;
    let chefs = body["data"].as_array().unwrap();
    assert_eq!(chefs.len(), 1);
    assert_eq!(chefs[0]["user"]["name"], "Chef Sipho");
    assert_eq!(chefs[0]["profile"]["experience_years"], 7);
}

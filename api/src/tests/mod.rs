mod auth_test;
mod catalog_test;

use crate::routes::routes;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header::CONTENT_TYPE};
use chrono::Utc;
use common::config::AppConfig;
use common::state::AppState;
use db::models::user::{self, ApprovalStatus, UserRole};
use db::test_utils::setup_test_db;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;

/// Makes sure the config singleton can initialize without a real `.env`.
fn ensure_test_config() {
    unsafe {
        std::env::set_var("DATABASE_PATH", "sqlite::memory:");
        std::env::set_var("JWT_SECRET", "test-secret");
    }
    AppConfig::set_jwt_secret("test-secret");
}

/// Fresh in-memory application with its database handle.
async fn test_app() -> (Router, DatabaseConnection) {
    ensure_test_config();
    let db = setup_test_db().await;
    let app = Router::new().nest("/api", routes(AppState::new(db.clone())));
    (app, db)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response was not valid JSON")
}

/// Seeds an admin directly; admins are not created through registration.
async fn seed_admin(db: &DatabaseConnection) -> user::Model {
    let now = Utc::now();
    user::ActiveModel {
        name: Set("admin".to_owned()),
        email: Set("admin@example.com".to_owned()),
        mobile: Set("0800000000".to_owned()),
        password_hash: Set(user::Model::hash_password("admin-password")),
        address: Set(None),
        role: Set(UserRole::Admin),
        approval_status: Set(ApprovalStatus::Approved),
        active: Set(true),
        approved_by: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed admin")
}

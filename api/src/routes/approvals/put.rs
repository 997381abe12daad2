use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::user;
use serde::Deserialize;
use services::approval;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::auth::post::UserResponse;
use crate::routes::common::error_response;

/// PUT /approvals/approve/{user_id}
///
/// Approves a pending or rejected partner. The moderating admin is recorded
/// on the account.
pub async fn approve(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    match approval::approve_user(app_state.db(), user_id, claims.sub).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "Partner approved",
            )),
        ),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

/// PUT /approvals/active/{user_id}
///
/// Toggles an account's `active` flag independently of approval status.
pub async fn set_active(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<SetActiveRequest>,
) -> impl IntoResponse {
    match user::Model::set_active(app_state.db(), user_id, req.active).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "Account updated",
            )),
        ),
        Err(err) => {
            if matches!(err, sea_orm::DbErr::RecordNotFound(_)) {
                return (
                    StatusCode::NOT_FOUND,
                    Json(ApiResponse::<UserResponse>::error("User not found")),
                );
            }
            tracing::error!(error = %err, "failed to toggle account");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(
                    "An internal error occurred",
                )),
            )
        }
    }
}

/// PUT /approvals/reject/{user_id}
pub async fn reject(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    match approval::reject_user(app_state.db(), user_id, claims.sub).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "Partner rejected",
            )),
        ),
        Err(err) => error_response(err),
    }
}

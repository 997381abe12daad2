use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::user;
use sea_orm::EntityTrait;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::auth::post::UserResponse;

/// GET /auth/me
///
/// Returns the authenticated user's account as stored, so clients can see
/// their current approval status.
pub async fn get_me(State(app_state): State<AppState>, AuthUser(claims): AuthUser) -> impl IntoResponse {
    match user::Entity::find_by_id(claims.sub).one(app_state.db()).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<UserResponse>::error("User not found")),
        ),
        Err(err) => {
            tracing::error!(error = %err, "failed to load current user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(
                    "An internal error occurred",
                )),
            )
        }
    }
}

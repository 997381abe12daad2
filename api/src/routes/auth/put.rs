use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use common::format_validation_errors;
use common::state::AppState;
use db::models::user;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::auth::post::UserResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub address: Option<String>,
}

/// PUT /auth/me
///
/// Updates the authenticated user's profile fields. Role, approval status
/// and credentials are not editable here.
pub async fn update_me(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(error_message)),
        );
    }

    let existing = match user::Entity::find_by_id(claims.sub).one(app_state.db()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<UserResponse>::error("User not found")),
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load user for update");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(
                    "An internal error occurred",
                )),
            );
        }
    };

    let mut active: user::ActiveModel = existing.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(address) = req.address {
        active.address = Set(Some(address));
    }
    active.updated_at = Set(Utc::now());

    match active.update(app_state.db()).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(updated),
                "Profile updated successfully",
            )),
        ),
        Err(err) => {
            tracing::error!(error = %err, "failed to update profile");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(
                    "An internal error occurred",
                )),
            )
        }
    }
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::user::ApprovalStatus;
use services::approval;

use crate::response::ApiResponse;
use crate::routes::auth::post::UserResponse;
use crate::routes::common::error_response;

async fn list(app_state: AppState, status: Option<ApprovalStatus>) -> impl IntoResponse {
    match approval::list_partners(app_state.db(), status).await {
        Ok(partners) => {
            let data: Vec<UserResponse> = partners.into_iter().map(UserResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Partners fetched successfully")),
            )
        }
        Err(err) => error_response(err),
    }
}

/// GET /approvals/all
pub async fn list_all(State(app_state): State<AppState>) -> impl IntoResponse {
    list(app_state, None).await
}

/// GET /approvals/pending
pub async fn list_pending(State(app_state): State<AppState>) -> impl IntoResponse {
    list(app_state, Some(ApprovalStatus::Pending)).await
}

/// GET /approvals/approved
pub async fn list_approved(State(app_state): State<AppState>) -> impl IntoResponse {
    list(app_state, Some(ApprovalStatus::Approved)).await
}

/// GET /approvals/rejected
pub async fn list_rejected(State(app_state): State<AppState>) -> impl IntoResponse {
    list(app_state, Some(ApprovalStatus::Rejected)).await
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use services::review;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

/// GET /reviews/booking/{booking_id}
pub async fn reviews_for_booking(
    State(app_state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> impl IntoResponse {
    match review::reviews_for_booking(app_state.db(), booking_id).await {
        Ok(reviews) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                reviews,
                "Reviews fetched successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::booking;
use services::booking as booking_service;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

/// PUT /bookings/{booking_id}/cancel
///
/// Administrative cancellation of an open booking.
pub async fn cancel_booking(
    State(app_state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> impl IntoResponse {
    match booking_service::cancel_booking(app_state.db(), booking_id).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::<Option<booking::Model>>::success(
                Some(updated),
                "Booking cancelled",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// PUT /bookings/{booking_id}/complete
///
/// Marks a confirmed booking as completed.
pub async fn complete_booking(
    State(app_state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> impl IntoResponse {
    match booking_service::complete_booking(app_state.db(), booking_id).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::<Option<booking::Model>>::success(
                Some(updated),
                "Booking completed",
            )),
        ),
        Err(err) => error_response(err),
    }
}

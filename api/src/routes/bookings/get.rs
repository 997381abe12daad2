use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use services::booking::{self, BookingDetail};

use crate::response::ApiResponse;
use crate::routes::common::error_response;

/// GET /bookings/{booking_id}
///
/// Booking with its attached menu items and all party responses.
pub async fn get_booking(
    State(app_state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> impl IntoResponse {
    match booking::get_booking_detail(app_state.db(), booking_id).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(ApiResponse::<Option<BookingDetail>>::success(
                Some(detail),
                "Booking fetched successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

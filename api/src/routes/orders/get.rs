use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::order::PaymentStatus;
use services::order;
use std::str::FromStr;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

/// GET /orders
///
/// All orders joined with their booking's guest counts, newest first.
pub async fn list_orders(State(app_state): State<AppState>) -> impl IntoResponse {
    match order::list_orders_with_members(app_state.db()).await {
        Ok(orders) => (
            StatusCode::OK,
            Json(ApiResponse::success(orders, "Orders fetched successfully")),
        ),
        Err(err) => error_response(err),
    }
}

/// GET /orders/status-summary
///
/// Order counts and guest totals grouped by payment status.
pub async fn status_summary(State(app_state): State<AppState>) -> impl IntoResponse {
    match order::status_summary(app_state.db()).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(ApiResponse::success(summary, "Summary fetched successfully")),
        ),
        Err(err) => error_response(err),
    }
}

/// GET /orders/by-status/{status}
///
/// Orders in one payment status; the path segment is the lowercase status
/// name (`upcoming`, `processing`, `completed`, `cancelled`).
pub async fn orders_by_status(
    State(app_state): State<AppState>,
    Path(status): Path<String>,
) -> impl IntoResponse {
    let Ok(status) = PaymentStatus::from_str(&status) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Vec<db::models::order::Model>>::error(format!(
                "Unknown payment status '{status}'"
            ))),
        );
    };

    match order::orders_by_status(app_state.db(), status).await {
        Ok(orders) => (
            StatusCode::OK,
            Json(ApiResponse::success(orders, "Orders fetched successfully")),
        ),
        Err(err) => error_response(err),
    }
}

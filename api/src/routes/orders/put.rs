use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::order::{self, PaymentStatus};
use serde::Deserialize;
use services::order as order_service;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

#[derive(Debug, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: PaymentStatus,
    pub transaction_id: Option<String>,
}

/// PUT /orders/{order_id}/payment-status
///
/// Progresses an order's payment; completing it stamps the payment date.
pub async fn update_payment_status(
    State(app_state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(req): Json<UpdatePaymentStatusRequest>,
) -> impl IntoResponse {
    match order_service::set_payment_status(
        app_state.db(),
        order_id,
        req.payment_status,
        req.transaction_id,
    )
    .await
    {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::<Option<order::Model>>::success(
                Some(updated),
                "Payment status updated",
            )),
        ),
        Err(err) => error_response(err),
    }
}

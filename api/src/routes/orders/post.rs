use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use common::state::AppState;
use db::models::order;
use serde::Deserialize;
use services::order as order_service;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub booking_id: i64,

    #[validate(range(min = 0.01, message = "order_value must be positive"))]
    pub order_value: f64,

    pub payment_method: Option<String>,
}

/// POST /orders
///
/// Creates an order for a confirmed booking; payment starts `upcoming`.
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<order::Model>>::error(error_message)),
        );
    }

    match order_service::create_order_for_booking(
        app_state.db(),
        req.booking_id,
        req.order_value,
        req.payment_method,
    )
    .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(created),
                "Order created successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use common::state::AppState;
use db::models::payment::{self, TransactionType};
use serde::Deserialize;
use services::payment::{self as payment_service, RecordPayment};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::error_response;

#[derive(Debug, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    pub booking_id: Option<i64>,

    #[validate(range(min = 0.01, message = "amount must be greater than zero"))]
    pub amount: f64,

    pub transaction_type: TransactionType,
    pub description: Option<String>,
}

/// POST /payments
///
/// Appends a ledger entry for the authenticated user.
pub async fn record_payment(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<RecordPaymentRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<payment::Model>>::error(error_message)),
        );
    }

    let params = RecordPayment {
        user_id: claims.sub,
        booking_id: req.booking_id,
        amount: req.amount,
        transaction_type: req.transaction_type,
        description: req.description,
    };

    match payment_service::record_payment(app_state.db(), params).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(created),
                "Payment recorded successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::payment::TransactionType;
use serde::Deserialize;
use services::payment::{self, PaymentHistoryEntry};
use std::str::FromStr;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// `credit` or `debit`; omitted means both.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Free-text search over description and account-holder name.
    pub q: Option<String>,
}

/// GET /payments/history?type=&q=
pub async fn payment_history(
    State(app_state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let transaction_type = match query.transaction_type.as_deref() {
        None | Some("") => None,
        Some(raw) => match TransactionType::from_str(raw) {
            Ok(kind) => Some(kind),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<Vec<PaymentHistoryEntry>>::error(format!(
                        "Unknown transaction type '{raw}'"
                    ))),
                );
            }
        },
    };

    match payment::payment_history(app_state.db(), transaction_type, query.q.as_deref()).await {
        Ok(entries) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                entries,
                "Payment history fetched successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

//! `/payments` route group (authenticated): the credit/debit ledger.
//!
//! - `GET  /payments/history?type=&q=` → filtered ledger entries
//! - `POST /payments` → record a payment

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};
use common::state::AppState;

use get::payment_history;
use post::record_payment;

pub fn payments_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(record_payment))
        .route("/history", get(payment_history))
}

//! `/orders` route group (authenticated).
//!
//! - `GET  /orders` → all orders with guest counts
//! - `GET  /orders/status-summary` → rollup per payment status
//! - `GET  /orders/by-status/{status}` → orders in one payment status
//! - `POST /orders` → create an order for a confirmed booking
//! - `PUT  /orders/{order_id}/payment-status` → progress payment (admin)

pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, put},
};
use common::state::AppState;

use crate::auth::guards::allow_admin;
use get::{list_orders, orders_by_status, status_summary};
use post::create_order;
use put::update_payment_status;

pub fn orders_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/status-summary", get(status_summary))
        .route("/by-status/{status}", get(orders_by_status))
        .route(
            "/{order_id}/payment-status",
            put(update_payment_status).route_layer(from_fn(allow_admin)),
        )
}

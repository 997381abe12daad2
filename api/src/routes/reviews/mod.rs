//! `/reviews` route group (authenticated).
//!
//! - `POST /reviews` → review a booking (customer)
//! - `GET  /reviews/booking/{booking_id}` → reviews for a booking

pub mod get;
pub mod post;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use common::state::AppState;

use crate::auth::guards::allow_customer;
use get::reviews_for_booking;
use post::add_review;

pub fn reviews_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_review).route_layer(from_fn(allow_customer)))
        .route("/booking/{booking_id}", get(reviews_for_booking))
}

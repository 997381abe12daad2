//! `/bookings` route group (authenticated): the booking lifecycle.
//!
//! - `POST /bookings` → create a booking (customer)
//! - `POST /bookings/respond` → record a candidate's accept/decline
//! - `POST /bookings/{booking_id}/menu-items` → attach a menu item
//! - `GET  /bookings/{booking_id}` → booking detail
//! - `PUT  /bookings/{booking_id}/cancel` → cancel (admin)
//! - `PUT  /bookings/{booking_id}/complete` → complete (admin)

pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use common::state::AppState;

use crate::auth::guards::allow_admin;
use get::get_booking;
use post::{add_menu_item, create_booking, respond};
use put::{cancel_booking, complete_booking};

pub fn bookings_routes() -> Router<AppState> {
    let admin_transitions = Router::new()
        .route("/{booking_id}/cancel", put(cancel_booking))
        .route("/{booking_id}/complete", put(complete_booking))
        .route_layer(from_fn(allow_admin));

    Router::new()
        .route("/", post(create_booking))
        .route("/respond", post(respond))
        .route("/{booking_id}/menu-items", post(add_menu_item))
        .route("/{booking_id}", get(get_booking))
        .merge(admin_transitions)
}

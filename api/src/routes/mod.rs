//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, each protected via the appropriate access
//! control middleware:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Registration and login (public)
//! - `/catalog` → Menu items, services, events (public reads)
//! - `/bookings` → Booking lifecycle (authenticated)
//! - `/orders` → Orders and payment progression (authenticated)
//! - `/payments` → Payment ledger (authenticated)
//! - `/reviews` → Post-booking reviews (authenticated)
//! - `/approvals` → Partner moderation (admin-only)

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::routes::{
    approvals::approvals_routes, auth::auth_routes, bookings::bookings_routes,
    catalog::catalog_routes, health::health_routes, orders::orders_routes,
    payments::payments_routes, reviews::reviews_routes,
};
use axum::{Router, middleware::from_fn};
// `::` keeps this pointing at the state crate, not the sibling module below.
use ::common::state::AppState;

pub mod approvals;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod common;
pub mod health;
pub mod orders;
pub mod payments;
pub mod reviews;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type and mounts all API
/// routes under their respective base paths.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/catalog", catalog_routes())
        .nest(
            "/bookings",
            bookings_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/orders",
            orders_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/payments",
            payments_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/reviews",
            reviews_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/approvals",
            approvals_routes().route_layer(from_fn(allow_admin)),
        )
        .with_state(app_state)
}

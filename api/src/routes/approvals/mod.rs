//! `/approvals` route group (admin-only): partner moderation.
//!
//! - `GET /approvals/all|pending|approved|rejected`
//! - `PUT /approvals/approve/{user_id}`
//! - `PUT /approvals/reject/{user_id}`
//! - `PUT /approvals/active/{user_id}`

pub mod get;
pub mod put;

use axum::{
    Router,
    routing::{get, put},
};
use common::state::AppState;

use get::{list_all, list_approved, list_pending, list_rejected};
use put::{approve, reject, set_active};

pub fn approvals_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_all))
        .route("/pending", get(list_pending))
        .route("/approved", get(list_approved))
        .route("/rejected", get(list_rejected))
        .route("/approve/{user_id}", put(approve))
        .route("/reject/{user_id}", put(reject))
        .route("/active/{user_id}", put(set_active))
}

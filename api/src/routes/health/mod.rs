//! `/health` route group.

pub mod get;

use axum::{Router, routing::get};
use common::state::AppState;

use get::health;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

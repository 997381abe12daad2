//! `/auth` route group: registration, login and current-user lookup.
//!
//! - `POST /auth/register` → `register`
//! - `POST /auth/login` → `login`
//! - `GET  /auth/me` → `get_me` (requires a bearer token)
//! - `PUT  /auth/me` → `update_me` (requires a bearer token)

pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, post},
};
use common::state::AppState;

use get::get_me;
use post::{login, register};
use put::update_me;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me).put(update_me))
}

//! Shared helpers for route handlers.

use axum::{Json, http::StatusCode};
use common::config::AppConfig;
use serde::Serialize;
use services::ServiceError;
use services::aggregate::PromotionPolicy;

use crate::response::ApiResponse;

/// The promotion policy selected by configuration.
pub fn promotion_policy() -> PromotionPolicy {
    if AppConfig::global().booking_promote_alternates {
        PromotionPolicy::PromoteAlternates
    } else {
        PromotionPolicy::PrimaryOnly
    }
}

/// Maps a `ServiceError` to an HTTP status and envelope.
///
/// Database errors are logged with full detail but surface to the client as
/// a generic message.
pub fn error_response<T>(err: ServiceError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let (status, message) = match &err {
        ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        ServiceError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
        ServiceError::Database(db_err) => {
            tracing::error!(error = %db_err, "database error while handling request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    };
    (status, Json(ApiResponse::error(message)))
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use common::state::AppState;
use db::models::review;
use serde::Deserialize;
use services::review::{self as review_service, AddReview};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::error_response;

#[derive(Debug, Deserialize, Validate)]
pub struct AddReviewRequest {
    pub booking_id: i64,

    #[validate(range(min = 0, max = 5, message = "hygiene must be between 0 and 5"))]
    pub hygiene: i32,

    #[validate(range(min = 0, max = 5, message = "food_taste must be between 0 and 5"))]
    pub food_taste: i32,

    #[validate(range(min = 0, max = 5, message = "chef_behavior must be between 0 and 5"))]
    pub chef_behavior: i32,

    pub comments: Option<String>,
}

/// POST /reviews
///
/// Records the authenticated customer's review of their booking. One review
/// per booking per customer.
pub async fn add_review(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<AddReviewRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<review::Model>>::error(error_message)),
        );
    }

    let params = AddReview {
        booking_id: req.booking_id,
        customer_user_id: claims.sub,
        hygiene: req.hygiene,
        food_taste: req.food_taste,
        chef_behavior: req.chef_behavior,
        comments: req.comments,
    };

    match review_service::add_review(app_state.db(), params).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(created),
                "Review added successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

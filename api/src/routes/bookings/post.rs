use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use common::format_validation_errors;
use common::state::AppState;
use db::models::booking::{self, BookingType};
use db::models::booking_menu_item;
use db::models::party_response::PartyRole;
use serde::Deserialize;
use services::booking::{self as booking_service, CreateBooking};
use services::response::{RespondToBooking, ResponseOutcome, respond_to_booking};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{error_response, promotion_policy};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub event_id: Option<i64>,
    pub service_id: Option<i64>,
    pub booking_type: BookingType,
    pub event_date: NaiveDate,

    #[validate(range(min = 1, message = "total_members must be at least 1"))]
    pub total_members: i32,
    #[validate(range(min = 0, message = "veg_guests must be non-negative"))]
    pub veg_guests: i32,
    #[validate(range(min = 0, message = "non_veg_guests must be non-negative"))]
    pub non_veg_guests: i32,

    pub primary_chef_user_id: Option<i64>,
    pub alternate_chef1_user_id: Option<i64>,
    pub alternate_chef2_user_id: Option<i64>,
    pub primary_vendor_user_id: Option<i64>,
    pub alternate_vendor1_user_id: Option<i64>,
    pub alternate_vendor2_user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddMenuItemRequest {
    pub menu_item_id: i64,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub booking_id: i64,
    pub role: PartyRole,
    pub accept: bool,
    pub comments: Option<String>,
}

/// POST /bookings
///
/// Creates a booking owned by the authenticated customer. Every filled
/// candidate slot is seeded with a pending response.
pub async fn create_booking(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<booking::Model>>::error(error_message)),
        );
    }

    let params = CreateBooking {
        customer_user_id: claims.sub,
        event_id: req.event_id,
        service_id: req.service_id,
        booking_type: req.booking_type,
        event_date: req.event_date,
        total_members: req.total_members,
        veg_guests: req.veg_guests,
        non_veg_guests: req.non_veg_guests,
        primary_chef_user_id: req.primary_chef_user_id,
        alternate_chef1_user_id: req.alternate_chef1_user_id,
        alternate_chef2_user_id: req.alternate_chef2_user_id,
        primary_vendor_user_id: req.primary_vendor_user_id,
        alternate_vendor1_user_id: req.alternate_vendor1_user_id,
        alternate_vendor2_user_id: req.alternate_vendor2_user_id,
    };

    match booking_service::create_booking(app_state.db(), params).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(created),
                "Booking created successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// POST /bookings/{booking_id}/menu-items
///
/// Attaches a menu item with a snapshot price; re-attaching the same item
/// replaces its quantity and price.
pub async fn add_menu_item(
    State(app_state): State<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<AddMenuItemRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<booking_menu_item::Model>>::error(
                error_message,
            )),
        );
    }

    match booking_service::add_menu_item(
        app_state.db(),
        booking_id,
        req.menu_item_id,
        req.quantity,
        req.price,
    )
    .await
    {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(row), "Menu item attached")),
        ),
        Err(err) => error_response(err),
    }
}

/// POST /bookings/respond
///
/// Records the authenticated partner's accept/decline for a booking and
/// returns the recomputed booking.
pub async fn respond(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<RespondRequest>,
) -> impl IntoResponse {
    let params = RespondToBooking {
        booking_id: req.booking_id,
        user_id: claims.sub,
        role: req.role,
        accept: req.accept,
        comments: req.comments,
    };

    match respond_to_booking(app_state.db(), params, promotion_policy()).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::<Option<ResponseOutcome>>::success(
                Some(outcome),
                "Response recorded",
            )),
        ),
        Err(err) => error_response(err),
    }
}

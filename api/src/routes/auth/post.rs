use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use common::state::AppState;
use db::models::user::{self, UserRole};
use serde::{Deserialize, Serialize};
use services::account::{self, ChefDetails, RegisterUser, VendorDetails};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::routes::common::error_response;

#[derive(Debug, Deserialize, Validate)]
pub struct ChefDetailsRequest {
    pub age: i32,
    pub experience_years: i32,
    pub cooking_styles: Option<String>,
    pub declaration: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VendorDetailsRequest {
    #[validate(length(min = 1, message = "Business name must not be empty"))]
    pub business_name: String,
    pub experience_years: i32,
    pub services_offered: Option<String>,
    pub declaration: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 10, max = 15, message = "Mobile must be 10-15 digits"))]
    pub mobile: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub address: Option<String>,
    pub role: UserRole,

    pub chef_details: Option<ChefDetailsRequest>,
    pub vendor_details: Option<VendorDetailsRequest>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Identifier must not be empty"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: String,
    pub approval_status: String,
    pub active: bool,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            mobile: user.mobile,
            role: user.role.to_string(),
            approval_status: user.approval_status.to_string(),
            active: user.active,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub token: String,
    pub expires_at: String,
}

/// POST /auth/register
///
/// Registers a customer, chef, vendor or admin. Chefs and vendors must
/// include their profile details and come out pending approval.
///
/// ### Responses
/// - `201 Created` with the created user
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` on duplicate email/mobile
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(error_message)),
        );
    }

    let params = RegisterUser {
        name: req.name,
        email: req.email,
        mobile: req.mobile,
        password: req.password,
        address: req.address,
        role: req.role,
        chef_details: req.chef_details.map(|d| ChefDetails {
            age: d.age,
            experience_years: d.experience_years,
            cooking_styles: d.cooking_styles,
            declaration: d.declaration,
        }),
        vendor_details: req.vendor_details.map(|d| VendorDetails {
            business_name: d.business_name,
            experience_years: d.experience_years,
            services_offered: d.services_offered,
            declaration: d.declaration,
        }),
    };

    match account::register_user(app_state.db(), params).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(created),
                "User registered successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// POST /auth/login
///
/// Verifies an email-or-mobile identifier and password, and issues a JWT.
/// The failure message never reveals which factor was wrong.
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<LoginResponse>::error(error_message)),
        );
    }

    match account::verify_credentials(app_state.db(), &req.identifier, &req.password).await {
        Ok(user) => {
            let (token, expires_at) = generate_jwt(&user);
            let data = LoginResponse {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role.to_string(),
                token,
                expires_at,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Login successful")),
            )
        }
        Err(err) => error_response(err),
    }
}

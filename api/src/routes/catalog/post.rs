use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use common::state::AppState;
use db::models::menu_category;
use serde::Deserialize;
use services::taxonomy::{self, SubcategoryInput, SubcategoryView};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubcategoryRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default = "default_active")]
    pub active: bool,

    #[validate(length(min = 1, message = "At least one category id is required"))]
    pub category_ids: Vec<i64>,
}

impl From<SubcategoryRequest> for SubcategoryInput {
    fn from(req: SubcategoryRequest) -> Self {
        SubcategoryInput {
            name: req.name,
            active: req.active,
            category_ids: req.category_ids,
        }
    }
}

/// POST /catalog/menu-categories (admin)
pub async fn create_menu_category(
    State(app_state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<menu_category::Model>>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match taxonomy::create_category(app_state.db(), &req.name, req.active).await {
        Ok(category) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(category),
                "Menu category created successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// POST /catalog/menu-subcategories (admin)
///
/// The subcategory and its category links are written in one transaction.
pub async fn create_menu_subcategory(
    State(app_state): State<AppState>,
    Json(req): Json<SubcategoryRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<SubcategoryView>>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match taxonomy::create_subcategory(app_state.db(), req.into()).await {
        Ok(view) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(view),
                "Menu subcategory created successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

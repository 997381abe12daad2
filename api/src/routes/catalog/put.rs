use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use common::state::AppState;
use db::models::menu_category;
use services::taxonomy::{self, SubcategoryView};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::catalog::post::{CategoryRequest, SubcategoryRequest};
use crate::routes::common::error_response;

/// PUT /catalog/menu-categories/{category_id} (admin)
pub async fn update_menu_category(
    State(app_state): State<AppState>,
    Path(category_id): Path<i64>,
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

    match taxonomy::update_category(app_state.db(), category_id, &req.name, req.active).await {
        Ok(category) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(category),
                "Menu category updated successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// PUT /catalog/menu-subcategories/{subcategory_id} (admin)
///
/// Replaces the subcategory's fields and its category links in one
/// transaction.
pub async fn update_menu_subcategory(
    State(app_state): State<AppState>,
    Path(subcategory_id): Path<i64>,
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

    match taxonomy::update_subcategory(app_state.db(), subcategory_id, req.into()).await {
        Ok(view) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(view),
                "Menu subcategory updated successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use services::taxonomy;

use crate::response::ApiResponse;
use crate::routes::common::error_response;

/// DELETE /catalog/menu-categories/{category_id} (admin)
///
/// Mapping rows under the category are removed with it.
pub async fn delete_menu_category(
    State(app_state): State<AppState>,
    Path(category_id): Path<i64>,
) -> impl IntoResponse {
    match taxonomy::delete_category(app_state.db(), category_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                None::<i64>,
                "Menu category deleted successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// DELETE /catalog/menu-subcategories/{subcategory_id} (admin)
pub async fn delete_menu_subcategory(
    State(app_state): State<AppState>,
    Path(subcategory_id): Path<i64>,
) -> impl IntoResponse {
    match taxonomy::delete_subcategory(app_state.db(), subcategory_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                None::<i64>,
                "Menu subcategory deleted successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

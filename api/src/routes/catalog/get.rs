use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::{event, menu_item, service, service_item};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use services::{directory, taxonomy};

use crate::response::ApiResponse;
use crate::routes::common::error_response;

fn internal_error<T: serde::Serialize + Default>(
    err: sea_orm::DbErr,
) -> (StatusCode, Json<ApiResponse<T>>) {
    tracing::error!(error = %err, "catalog query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error("An internal error occurred")),
    )
}

/// GET /catalog/menu-items
///
/// Active menu items, by name.
pub async fn list_menu_items(State(app_state): State<AppState>) -> impl IntoResponse {
    match menu_item::Entity::find()
        .filter(menu_item::Column::Active.eq(true))
        .order_by_asc(menu_item::Column::Name)
        .all(app_state.db())
        .await
    {
        Ok(items) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                items,
                "Menu items fetched successfully",
            )),
        ),
        Err(err) => internal_error(err),
    }
}

/// GET /catalog/services
pub async fn list_services(State(app_state): State<AppState>) -> impl IntoResponse {
    match service::Entity::find()
        .filter(service::Column::Active.eq(true))
        .order_by_asc(service::Column::Name)
        .all(app_state.db())
        .await
    {
        Ok(services) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                services,
                "Services fetched successfully",
            )),
        ),
        Err(err) => internal_error(err),
    }
}

/// GET /catalog/services/{service_id}/items
pub async fn list_service_items(
    State(app_state): State<AppState>,
    Path(service_id): Path<i64>,
) -> impl IntoResponse {
    match service_item::Entity::find()
        .filter(service_item::Column::ServiceId.eq(service_id))
        .order_by_asc(service_item::Column::Name)
        .all(app_state.db())
        .await
    {
        Ok(items) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                items,
                "Service items fetched successfully",
            )),
        ),
        Err(err) => internal_error(err),
    }
}

/// GET /catalog/menu-categories
pub async fn list_menu_categories(State(app_state): State<AppState>) -> impl IntoResponse {
    match taxonomy::list_categories(app_state.db()).await {
        Ok(categories) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                categories,
                "Menu categories fetched successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// GET /catalog/menu-subcategories
///
/// Every subcategory together with the categories it is filed under.
pub async fn list_menu_subcategories(State(app_state): State<AppState>) -> impl IntoResponse {
    match taxonomy::list_subcategories(app_state.db()).await {
        Ok(subcategories) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                subcategories,
                "Menu subcategories fetched successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// GET /catalog/menu-categories/{category_id}/subcategories
pub async fn list_subcategories_for_category(
    State(app_state): State<AppState>,
    Path(category_id): Path<i64>,
) -> impl IntoResponse {
    match taxonomy::subcategories_for_category(app_state.db(), category_id).await {
        Ok(subcategories) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                subcategories,
                "Subcategories fetched successfully",
            )),
        ),
        Err(err) => error_response(err),
    }
}

/// GET /catalog/chefs
///
/// Approved, active chefs with their profiles.
pub async fn list_public_chefs(State(app_state): State<AppState>) -> impl IntoResponse {
    match directory::public_chefs(app_state.db()).await {
        Ok(chefs) => (
            StatusCode::OK,
            Json(ApiResponse::success(chefs, "Chefs fetched successfully")),
        ),
        Err(err) => error_response(err),
    }
}

/// GET /catalog/vendors
pub async fn list_public_vendors(State(app_state): State<AppState>) -> impl IntoResponse {
    match directory::public_vendors(app_state.db()).await {
        Ok(vendors) => (
            StatusCode::OK,
            Json(ApiResponse::success(vendors, "Vendors fetched successfully")),
        ),
        Err(err) => error_response(err),
    }
}

/// GET /catalog/events
pub async fn list_events(State(app_state): State<AppState>) -> impl IntoResponse {
    match event::Entity::find()
        .order_by_asc(event::Column::EventDate)
        .all(app_state.db())
        .await
    {
        Ok(events) => (
            StatusCode::OK,
            Json(ApiResponse::success(events, "Events fetched successfully")),
        ),
        Err(err) => internal_error(err),
    }
}

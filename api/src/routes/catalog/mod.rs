//! `/catalog` route group: public reads over menu items, the category
//! taxonomy, services, events and the partner directory. Taxonomy writes are
//! admin-only.

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use common::state::AppState;

use crate::auth::guards::allow_admin;
use delete::{delete_menu_category, delete_menu_subcategory};
use get::{
    list_events, list_menu_categories, list_menu_items, list_menu_subcategories,
    list_public_chefs, list_public_vendors, list_service_items, list_services,
    list_subcategories_for_category,
};
use post::{create_menu_category, create_menu_subcategory};
use put::{update_menu_category, update_menu_subcategory};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/menu-items", get(list_menu_items))
        .route("/services", get(list_services))
        .route("/services/{service_id}/items", get(list_service_items))
        .route("/events", get(list_events))
        .route("/chefs", get(list_public_chefs))
        .route("/vendors", get(list_public_vendors))
        .route(
            "/menu-categories",
            get(list_menu_categories)
                .merge(post(create_menu_category).route_layer(from_fn(allow_admin))),
        )
        .route(
            "/menu-categories/{category_id}",
            put(update_menu_category)
                .delete(delete_menu_category)
                .route_layer(from_fn(allow_admin)),
        )
        .route(
            "/menu-categories/{category_id}/subcategories",
            get(list_subcategories_for_category),
        )
        .route(
            "/menu-subcategories",
            get(list_menu_subcategories)
                .merge(post(create_menu_subcategory).route_layer(from_fn(allow_admin))),
        )
        .route(
            "/menu-subcategories/{subcategory_id}",
            put(update_menu_subcategory)
                .delete(delete_menu_subcategory)
                .route_layer(from_fn(allow_admin)),
        )
}

// src/kitchen/routes.rs

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers;

/// Creates and returns the kitchen router
///
/// # Routes
/// - `GET|POST /api/pantry` - List (sorted) or add pantry items
/// - `PUT|DELETE /api/pantry/:id` - Update or remove a pantry item
/// - `GET|POST /api/shopping-list` - Grouped list or add items
/// - `PUT|DELETE /api/shopping-list/:id` - Update or remove an item
/// - `POST /api/shopping-list/toggle-all` - Check or uncheck everything
/// - `GET /api/history` - Recipe generation history
pub fn kitchen_routes() -> Router {
    Router::new()
        .route(
            "/api/pantry",
            get(handlers::list_pantry).post(handlers::add_pantry_item),
        )
        .route(
            "/api/pantry/:id",
            put(handlers::update_pantry_item).delete(handlers::delete_pantry_item),
        )
        .route(
            "/api/shopping-list",
            get(handlers::get_shopping_list).post(handlers::add_shopping_items),
        )
        .route(
            "/api/shopping-list/toggle-all",
            post(handlers::toggle_all_shopping_items),
        )
        .route(
            "/api/shopping-list/:id",
            put(handlers::update_shopping_item).delete(handlers::delete_shopping_item),
        )
        .route("/api/history", get(handlers::get_history))
}

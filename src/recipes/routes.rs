// src/recipes/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the recipes router
///
/// # Routes
/// - `POST /api/recipes/generate` - Generate recipes (images follow in the background)
/// - `GET /api/recipes/generated` - Current generated recipes
/// - `GET /api/recipes/:id` - Recipe with cooking steps
/// - `POST /api/recipes/:id/image` - Regenerate the image
/// - `POST /api/recipes/:id/translate` - Translate the recipe
/// - `POST /api/recipes/:id/save` - Toggle saved
/// - `GET|POST /api/recipes/:id/missing` - Missing ingredients, add them to the list
/// - `GET /api/saved-recipes` - Saved recipes
/// - `POST /api/planner` - Weekly meal plan
/// - `POST /api/assistant/stores` - Nearby stores for the shopping list
pub fn recipes_routes() -> Router {
    Router::new()
        .route("/api/recipes/generate", post(handlers::generate_recipes))
        .route("/api/recipes/generated", get(handlers::get_generated_recipes))
        .route("/api/recipes/:id", get(handlers::get_recipe_details))
        .route("/api/recipes/:id/image", post(handlers::regenerate_image))
        .route("/api/recipes/:id/translate", post(handlers::translate_recipe))
        .route("/api/recipes/:id/save", post(handlers::toggle_save_recipe))
        .route(
            "/api/recipes/:id/missing",
            get(handlers::get_missing_ingredients).post(handlers::add_missing_to_shopping_list),
        )
        .route("/api/saved-recipes", get(handlers::get_saved_recipes))
        .route("/api/planner", post(handlers::generate_meal_plan))
        .route("/api/assistant/stores", post(handlers::find_nearby_stores))
}

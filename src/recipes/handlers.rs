// src/recipes/handlers.rs

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::models::*;
use super::validators::{
    GenerateRecipesValidator, ImageRequestValidator, MealPlanValidator, NearbyStoresValidator,
};
use crate::auth::AuthedSession;
use crate::common::{ApiError, AppState, Outcome, Validator};
use crate::i18n::{t, t_with};
use crate::kitchen::models::NewShoppingListItem;

async fn find_recipe(session: &AuthedSession, recipe_id: &str) -> Result<Recipe, ApiError> {
    session
        .store
        .find_recipe(recipe_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Recipe {} not found", recipe_id)))
}

// ============================================================================
// Generation
// ============================================================================

/// POST /api/recipes/generate
///
/// Returns the recipes as soon as the text model answers. Images are filled
/// in by background tasks; poll `GET /api/recipes/generated` to pick them up.
///
/// # Request Body
/// ```json
/// {
///   "ingredients": "eggs, basil",
///   "searchQuery": null,
///   "filters": { "numberOfRecipes": 3, "diet": "vegetarian", "cookingTime": "fast" },
///   "advanced": { "mustHave": "tomato", "exclude": "peanuts" },
///   "generateImages": true
/// }
/// ```
pub async fn generate_recipes(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
    Json(payload): Json<GenerateRecipesRequest>,
) -> Result<Json<Outcome<Vec<Recipe>>>, ApiError> {
    GenerateRecipesValidator.validate(&payload).into_result()?;
    let user = session.require_user().await?;
    let state = state_lock.read().await.clone();
    let language = session.store.language().await;

    let outcome = state.ai_gateway.generate_recipes(&payload, language).await;
    session.store.set_generated_recipes(outcome.value.clone()).await;

    if !outcome.value.is_empty() {
        session
            .store
            .add_to_history(&payload.history_query(), outcome.value.len())
            .await;

        if payload.generate_images {
            let store = Arc::clone(&session.store);
            let tasks = state.ai_gateway.generate_images_for_recipes(
                &outcome.value,
                user.is_premium(),
                move |recipe_id, image| {
                    let store = Arc::clone(&store);
                    async move {
                        if !store.set_recipe_image(&recipe_id, image).await {
                            debug!(recipe_id = %recipe_id, "Image arrived for a recipe no longer shown");
                        }
                    }
                },
            );
            debug!(tasks = tasks.len(), "Image generation started");
        }
    }

    info!(
        user_id = %user.id,
        recipes = outcome.value.len(),
        degraded = outcome.is_degraded(),
        "Recipe generation finished"
    );
    Ok(Json(outcome))
}

/// GET /api/recipes/generated
pub async fn get_generated_recipes(session: AuthedSession) -> Result<Json<Vec<Recipe>>, ApiError> {
    session.require_user().await?;
    Ok(Json(session.store.generated_recipes().await))
}

/// GET /api/recipes/:id
pub async fn get_recipe_details(
    session: AuthedSession,
    Path(recipe_id): Path<String>,
) -> Result<Json<RecipeDetails>, ApiError> {
    session.require_user().await?;
    let recipe = find_recipe(&session, &recipe_id).await?;
    Ok(Json(RecipeDetails::new(recipe)))
}

/// POST /api/recipes/:id/image
///
/// Regenerates the image of a generated or saved recipe. Premium users get
/// the requested style and aspect ratio from the premium model. On failure
/// the recipe comes back unchanged with a notice.
pub async fn regenerate_image(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
    Path(recipe_id): Path<String>,
    Json(payload): Json<GenerateImageRequest>,
) -> Result<Json<Outcome<Recipe>>, ApiError> {
    ImageRequestValidator.validate(&payload).into_result()?;
    let user = session.require_user().await?;
    let recipe = find_recipe(&session, &recipe_id).await?;
    let state = state_lock.read().await.clone();

    let aspect_ratio = payload.aspect_ratio.as_deref().unwrap_or(DEFAULT_ASPECT_RATIO);
    let outcome = state
        .ai_gateway
        .generate_image(&recipe.english_title, user.is_premium(), payload.style, aspect_ratio)
        .await;

    // a failed regeneration keeps whatever image the recipe already had
    let Some(uri) = outcome.value else {
        return Ok(Json(Outcome {
            value: recipe,
            notice: outcome.notice,
        }));
    };

    let image = RecipeImage::Ready(uri);
    session.store.set_recipe_image(&recipe_id, image.clone()).await;

    let updated = Recipe { image, ..recipe };
    Ok(Json(Outcome {
        value: updated,
        notice: outcome.notice,
    }))
}

/// POST /api/recipes/:id/translate
pub async fn translate_recipe(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
    Path(recipe_id): Path<String>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<Outcome<Recipe>>, ApiError> {
    session.require_user().await?;
    let recipe = find_recipe(&session, &recipe_id).await?;
    let state = state_lock.read().await.clone();

    let outcome = state
        .ai_gateway
        .translate_recipe(&recipe, payload.language)
        .await;
    if outcome.is_degraded() {
        return Ok(Json(outcome));
    }

    let translated = TranslatedContent::of(&outcome.value);
    let value = session
        .store
        .apply_translation(&recipe_id, &translated)
        .await
        .unwrap_or(outcome.value);
    Ok(Json(Outcome {
        value,
        notice: outcome.notice,
    }))
}

/// POST /api/recipes/:id/save
///
/// Toggles the saved flag; a second call unsaves the recipe.
pub async fn toggle_save_recipe(
    session: AuthedSession,
    Path(recipe_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = session.require_user().await?;
    let recipe = find_recipe(&session, &recipe_id).await?;

    let saved = session.signed_in(session.store.toggle_save_recipe(&recipe).await)?;
    info!(user_id = %user.id, recipe_id = %recipe_id, saved = saved, "Recipe save toggled");
    Ok(Json(serde_json::json!({
        "recipeId": recipe_id,
        "isSaved": saved,
    })))
}

/// GET /api/saved-recipes
pub async fn get_saved_recipes(session: AuthedSession) -> Result<Json<Vec<Recipe>>, ApiError> {
    session.require_user().await?;
    Ok(Json(session.store.snapshot().await.saved_recipes))
}

// ============================================================================
// Missing ingredients
// ============================================================================

/// GET /api/recipes/:id/missing
pub async fn get_missing_ingredients(
    session: AuthedSession,
    Path(recipe_id): Path<String>,
) -> Result<Json<MissingIngredientsResponse>, ApiError> {
    session.require_user().await?;
    let recipe = find_recipe(&session, &recipe_id).await?;
    let pantry = session.store.snapshot().await.pantry;

    let missing = missing_ingredients(&recipe.ingredients, &pantry);
    let available = recipe
        .ingredients
        .iter()
        .filter(|i| !missing.contains(i))
        .cloned()
        .collect();

    Ok(Json(MissingIngredientsResponse {
        recipe_id,
        missing,
        available,
    }))
}

/// POST /api/recipes/:id/missing
///
/// Adds every missing ingredient to the shopping list with quantity "1"
/// under the localized groceries category.
pub async fn add_missing_to_shopping_list(
    session: AuthedSession,
    Path(recipe_id): Path<String>,
) -> Result<Json<AddMissingResponse>, ApiError> {
    let user = session.require_user().await?;
    let recipe = find_recipe(&session, &recipe_id).await?;
    let language = session.store.language().await;
    let snapshot = session.store.snapshot().await;

    let missing = missing_ingredients(&recipe.ingredients, &snapshot.pantry);
    let added = missing.len();
    let message = t_with(language, "details_add_missing", &[("count", added.to_string())]);

    if missing.is_empty() {
        return Ok(Json(AddMissingResponse {
            added,
            message,
            shopping_list: snapshot.shopping_list,
        }));
    }

    let category = t(language, "shopping_list_groceries");
    let items = missing
        .into_iter()
        .map(|name| NewShoppingListItem {
            name,
            quantity: "1".to_string(),
            category: Some(category.clone()),
        })
        .collect();
    let shopping_list = session.signed_in(session.store.add_to_shopping_list(items).await)?;

    info!(user_id = %user.id, recipe_id = %recipe_id, added = added, "Missing ingredients added");
    Ok(Json(AddMissingResponse {
        added,
        message,
        shopping_list,
    }))
}

// ============================================================================
// Planner and store assistant
// ============================================================================

/// POST /api/planner
pub async fn generate_meal_plan(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
    Json(payload): Json<MealPlanRequest>,
) -> Result<Json<Outcome<Vec<MealPlanDay>>>, ApiError> {
    MealPlanValidator.validate(&payload).into_result()?;
    session.require_user().await?;
    let state = state_lock.read().await.clone();
    let language = session.store.language().await;

    let outcome = state
        .ai_gateway
        .generate_meal_plan(payload.diet.as_deref(), payload.calories, language)
        .await;
    Ok(Json(outcome))
}

/// POST /api/assistant/stores
pub async fn find_nearby_stores(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
    Json(payload): Json<NearbyStoresRequest>,
) -> Result<Json<Outcome<StoreSearchResult>>, ApiError> {
    NearbyStoresValidator.validate(&payload).into_result()?;
    session.require_user().await?;
    let state = state_lock.read().await.clone();
    let language = session.store.language().await;
    let shopping_list = session.store.snapshot().await.shopping_list;

    let outcome = state
        .ai_gateway
        .find_nearby_stores(payload.latitude, payload.longitude, &shopping_list, language)
        .await;
    Ok(Json(outcome))
}

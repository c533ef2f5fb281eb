#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::AuthedSession;
    use crate::common::state::testing::*;
    use crate::common::{ApiError, Validator};
    use crate::kitchen::models::{NewPantryItem, PantryItem};
    use crate::services::ai_gateway::testing::{FakeAiClient, TWO_RECIPES};
    use crate::services::ai_gateway::{parse_recipes, AI_UNAVAILABLE, STORES_EMPTY_LIST};
    use axum::extract::{Extension, Json, Path};
    use models::*;
    use std::time::Duration;
    use validators::{GenerateRecipesValidator, ImageRequestValidator, NearbyStoresValidator};

    fn generate_request(ingredients: &str) -> GenerateRecipesRequest {
        serde_json::from_value(serde_json::json!({ "ingredients": ingredients })).unwrap()
    }

    fn pantry(names: &[&str]) -> Vec<PantryItem> {
        names
            .iter()
            .map(|name| PantryItem {
                id: format!("P_{}", name),
                name: name.to_string(),
                quantity: "1".to_string(),
                expiry_date: "2030-01-01".to_string(),
                notes: None,
            })
            .collect()
    }

    async fn wait_for_images(session: &AuthedSession) -> Vec<Recipe> {
        for _ in 0..100 {
            let recipes = session.store.generated_recipes().await;
            if recipes.iter().all(|r| !r.image.is_pending()) {
                return recipes;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        session.store.generated_recipes().await
    }

    // ========================================================================
    // Models
    // ========================================================================

    #[test]
    fn test_recipe_image_wire_format() {
        assert_eq!(serde_json::to_value(RecipeImage::Pending).unwrap(), serde_json::Value::Null);
        assert_eq!(serde_json::to_value(RecipeImage::Failed).unwrap(), "error");
        assert_eq!(
            serde_json::from_value::<RecipeImage>(serde_json::json!("data:image/png;base64,AA"))
                .unwrap(),
            RecipeImage::Ready("data:image/png;base64,AA".to_string())
        );
        assert_eq!(
            serde_json::from_value::<RecipeImage>(serde_json::json!("error")).unwrap(),
            RecipeImage::Failed
        );
    }

    #[test]
    fn test_difficulty_is_lenient() {
        let parse = |s: &str| serde_json::from_value::<Difficulty>(serde_json::json!(s)).unwrap();
        assert_eq!(parse("EASY"), Difficulty::Easy);
        assert_eq!(parse("hard"), Difficulty::Hard);
        assert_eq!(parse("Fácil"), Difficulty::Medium);
    }

    #[test]
    fn test_missing_ingredients_matches_by_substring() {
        let ingredients = vec![
            "200g Pasta".to_string(),
            "3 tomatoes".to_string(),
            "Fresh basil leaves".to_string(),
        ];
        let missing = missing_ingredients(&ingredients, &pantry(&["pasta", "Basil"]));
        assert_eq!(missing, vec!["3 tomatoes".to_string()]);

        let missing = missing_ingredients(&ingredients, &[]);
        assert_eq!(missing.len(), 3);
    }

    #[test]
    fn test_step_duration_seconds() {
        assert_eq!(step_duration_seconds("Simmer for 10 minutes"), Some(600));
        assert_eq!(step_duration_seconds("Bake 1 hour until golden"), Some(3600));
        assert_eq!(step_duration_seconds("Rest 5 min"), Some(300));
        assert_eq!(step_duration_seconds("Season to taste"), None);
    }

    #[test]
    fn test_recipe_details_builds_steps() {
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        let details = RecipeDetails::new(recipe);
        assert_eq!(details.steps.len(), 2);
        assert_eq!(details.steps[0].timer_seconds, Some(600));
        assert_eq!(details.steps[1].timer_seconds, None);
    }

    #[test]
    fn test_history_query_prefers_search() {
        let mut request = generate_request("eggs");
        assert_eq!(request.history_query(), "eggs");
        request.search_query = Some("  pad thai ".to_string());
        assert_eq!(request.history_query(), "pad thai");
    }

    #[test]
    fn test_validators() {
        assert!(!GenerateRecipesValidator.validate(&generate_request("  ")).is_valid);

        let mut request = generate_request("eggs");
        request.filters.number_of_recipes = 11;
        assert!(!GenerateRecipesValidator.validate(&request).is_valid);

        let image = GenerateImageRequest {
            style: ImageStyle::Rustic,
            aspect_ratio: Some("3:2".to_string()),
        };
        assert!(!ImageRequestValidator.validate(&image).is_valid);

        let stores = NearbyStoresRequest {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(NearbyStoresValidator.validate(&stores).errors.len(), 1);
    }

    // ========================================================================
    // Handlers
    // ========================================================================

    #[tokio::test]
    async fn test_generate_records_history_and_fills_images() {
        let client = FakeAiClient::configured()
            .with_json(TWO_RECIPES)
            .with_image(Some("data:image/png;base64,AA"));
        let state = test_state(client).await;
        let session = user_session(&state, "ann@example.com").await;

        let Json(outcome) = handlers::generate_recipes(
            Extension(state.clone()),
            session.clone(),
            Json(generate_request("pasta, tomatoes")),
        )
        .await
        .unwrap();
        assert_eq!(outcome.value.len(), 2);
        assert!(outcome.notice.is_none());

        let history = session.store.snapshot().await.history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].query, "pasta, tomatoes");
        assert_eq!(history[0].recipe_count, 2);

        let recipes = wait_for_images(&session).await;
        assert!(recipes
            .iter()
            .all(|r| r.image == RecipeImage::Ready("data:image/png;base64,AA".to_string())));
    }

    #[tokio::test]
    async fn test_generate_without_ai_returns_notice() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;

        let Json(outcome) = handlers::generate_recipes(
            Extension(state),
            session.clone(),
            Json(generate_request("eggs")),
        )
        .await
        .unwrap();
        assert!(outcome.value.is_empty());
        assert_eq!(outcome.notice.unwrap().message, AI_UNAVAILABLE);
        assert!(session.store.snapshot().await.history.is_empty());
    }

    #[tokio::test]
    async fn test_add_missing_uses_groceries_category() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        session.store.set_generated_recipes(vec![recipe.clone()]).await;
        session
            .store
            .add_to_pantry(NewPantryItem {
                name: "Pasta".to_string(),
                quantity: "500g".to_string(),
                expiry_date: "2030-01-01".to_string(),
                notes: None,
            })
            .await;

        let Json(missing) =
            handlers::get_missing_ingredients(session.clone(), Path(recipe.id.clone()))
                .await
                .unwrap();
        assert_eq!(missing.missing, vec!["3 tomatoes".to_string()]);
        assert_eq!(missing.available, vec!["200g pasta".to_string()]);

        let Json(added) =
            handlers::add_missing_to_shopping_list(session.clone(), Path(recipe.id.clone()))
                .await
                .unwrap();
        assert_eq!(added.added, 1);
        assert_eq!(added.message, "Add 1 Missing to List");
        assert_eq!(added.shopping_list[0].name, "3 tomatoes");
        assert_eq!(added.shopping_list[0].quantity, "1");
        assert_eq!(added.shopping_list[0].category, "Groceries");
    }

    #[tokio::test]
    async fn test_save_toggle_and_unknown_recipe() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        session.store.set_generated_recipes(vec![recipe.clone()]).await;

        let Json(body) = handlers::toggle_save_recipe(session.clone(), Path(recipe.id.clone()))
            .await
            .unwrap();
        assert_eq!(body["isSaved"], true);

        let Json(saved) = handlers::get_saved_recipes(session.clone()).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].is_saved);

        let err = handlers::get_recipe_details(session, Path("R_NOPE".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_translate_failure_keeps_original() {
        let state = test_state(FakeAiClient::configured()).await;
        let session = user_session(&state, "ann@example.com").await;
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        session.store.set_generated_recipes(vec![recipe.clone()]).await;

        let Json(outcome) = handlers::translate_recipe(
            Extension(state),
            session.clone(),
            Path(recipe.id.clone()),
            Json(TranslateRequest {
                language: crate::i18n::Language::Fr,
            }),
        )
        .await
        .unwrap();
        assert!(outcome.is_degraded());
        assert_eq!(outcome.value, recipe);
        assert_eq!(session.store.find_recipe(&recipe.id).await.unwrap(), recipe);
    }

    #[tokio::test]
    async fn test_translate_swaps_content() {
        let translated = r#"{"title":"Pâtes","description":"Rapide.",
            "ingredients":["pâtes","tomates"],"instructions":["Cuire","Mélanger"]}"#;
        let state = test_state(FakeAiClient::configured().with_json(translated)).await;
        let session = user_session(&state, "ann@example.com").await;
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        session.store.set_generated_recipes(vec![recipe.clone()]).await;

        let Json(outcome) = handlers::translate_recipe(
            Extension(state),
            session.clone(),
            Path(recipe.id.clone()),
            Json(TranslateRequest {
                language: crate::i18n::Language::Fr,
            }),
        )
        .await
        .unwrap();
        assert_eq!(outcome.value.id, recipe.id);
        assert_eq!(outcome.value.title, "Pâtes");
        assert_eq!(session.store.find_recipe(&recipe.id).await.unwrap().title, "Pâtes");
    }

    #[tokio::test]
    async fn test_regenerate_image_failure_keeps_prior_image() {
        let state = test_state(FakeAiClient::configured()).await;
        let session = user_session(&state, "ann@example.com").await;
        let good = RecipeImage::Ready("data:image/png;base64,GOOD".to_string());
        let recipe = Recipe {
            image: good.clone(),
            ..parse_recipes(TWO_RECIPES).unwrap().remove(0)
        };
        session.store.set_generated_recipes(vec![recipe.clone()]).await;

        let Json(outcome) = handlers::regenerate_image(
            Extension(state),
            session.clone(),
            Path(recipe.id.clone()),
            Json(GenerateImageRequest::default()),
        )
        .await
        .unwrap();
        assert!(outcome.is_degraded());
        assert_eq!(outcome.value.image, good);
        assert_eq!(session.store.find_recipe(&recipe.id).await.unwrap().image, good);
    }

    #[tokio::test]
    async fn test_regenerate_image_of_saved_recipe_is_persisted() {
        let client = FakeAiClient::configured().with_image(Some("data:image/png;base64,NEW"));
        let state = test_state(client).await;
        let session = user_session(&state, "ann@example.com").await;
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        session.store.set_generated_recipes(vec![recipe.clone()]).await;
        session.store.toggle_save_recipe(&recipe).await.unwrap();
        session.store.set_generated_recipes(Vec::new()).await;

        let Json(outcome) = handlers::regenerate_image(
            Extension(state.clone()),
            session.clone(),
            Path(recipe.id.clone()),
            Json(GenerateImageRequest::default()),
        )
        .await
        .unwrap();
        let fresh = RecipeImage::Ready("data:image/png;base64,NEW".to_string());
        assert_eq!(outcome.value.image, fresh);
        assert_eq!(session.store.find_recipe(&recipe.id).await.unwrap().image, fresh);

        session.store.flush().await;
        let user_id = session.store.user().await.unwrap().id;
        let backend = state.read().await.backend.clone();
        let bag = backend.load_user_data(&user_id).await.unwrap();
        assert_eq!(bag.saved_recipes[0].image, fresh);
        assert!(bag.saved_recipes[0].is_saved);
    }

    #[tokio::test]
    async fn test_stores_with_empty_list() {
        let state = test_state(FakeAiClient::configured()).await;
        let session = user_session(&state, "ann@example.com").await;

        let Json(outcome) = handlers::find_nearby_stores(
            Extension(state),
            session,
            Json(NearbyStoresRequest {
                latitude: 23.8,
                longitude: 90.4,
            }),
        )
        .await
        .unwrap();
        assert_eq!(outcome.value.summary, STORES_EMPTY_LIST);
        assert!(outcome.value.sources.is_empty());
    }
}

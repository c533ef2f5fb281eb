// src/services/ai_gateway.rs
//! Prompt shaping, response schemas and parsing on top of an [`AiClient`]
//!
//! No call here fails a request. Errors are logged and turned into a neutral
//! value plus an error [`Notice`].

use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::gemini::{clean_json_text, serialization_error, AiClient, GeminiError, ImageRequest, ImageTier};
use crate::common::{Notice, Outcome};
use crate::i18n::Language;
use crate::kitchen::models::ShoppingListItem;
use crate::recipes::models::{
    GenerateRecipesRequest, GeneratedRecipe, ImageStyle, MealPlanDay, Recipe, RecipeImage,
    StoreSearchResult, TranslatedContent, DEFAULT_ASPECT_RATIO,
};

pub const AI_UNAVAILABLE: &str = "AI service not available.";
pub const RECIPES_FAILED: &str =
    "Failed to generate recipes. The AI's response might be unavailable or malformed. Please try again.";
pub const IMAGE_FAILED: &str = "Image generation failed.";
pub const MEAL_PLAN_FAILED: &str =
    "Failed to generate a meal plan. The AI's response might be unavailable or malformed. Please try again.";
pub const TRANSLATION_FAILED: &str = "Translation failed. Please try again.";
pub const STORES_FAILED: &str =
    "Could not find nearby stores. Please ensure location services are enabled.";
pub const STORES_EMPTY_LIST: &str = "Your shopping list is empty. Add items to find nearby stores.";
pub const STORES_ERROR_SUMMARY: &str =
    "An error occurred while searching for stores. Please try again.";

// ============================================================================
// Prompts
// ============================================================================

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn recipe_prompt(request: &GenerateRecipesRequest, language: Language) -> String {
    let filters = &request.filters;
    let mut preferences = Vec::new();
    if let Some(diet) = non_empty(filters.diet.as_deref()) {
        preferences.push(format!("The user prefers a {} diet.", diet));
    }
    if let Some(meal_type) = non_empty(filters.meal_type.as_deref()) {
        preferences.push(format!("This should be a {} recipe.", meal_type));
    }
    if let Some(cuisine) = non_empty(filters.cuisine.as_deref()) {
        preferences.push(format!("The recipe should be from {} cuisine.", cuisine));
    }
    if let Some(time) = filters.cooking_time {
        preferences.push(time.prompt_hint().to_string());
    }
    if let Some(difficulty) = non_empty(filters.difficulty.as_deref()) {
        preferences.push(format!("The difficulty level should be {}.", difficulty));
    }

    let focus = match non_empty(request.search_query.as_deref()) {
        Some(query) => format!(
            "The user is specifically searching for: \"{}\". Prioritize this in the generation.",
            query
        ),
        None => format!("The user has these ingredients: {}.", request.ingredients.trim()),
    };

    let mut lines = vec![
        format!(
            "You are an expert chef AI. Generate {} unique, delicious, and creative recipes.",
            filters.number_of_recipes
        ),
        focus,
        language.cuisine_context().to_string(),
    ];
    if !preferences.is_empty() {
        lines.push(preferences.join(" "));
    }
    if let Some(must_have) = non_empty(request.advanced.must_have.as_deref()) {
        lines.push(format!(
            "Crucially, the recipes MUST include the following ingredients: {}.",
            must_have
        ));
    }
    if let Some(exclude) = non_empty(request.advanced.exclude.as_deref()) {
        lines.push(format!(
            "The recipes MUST NOT include any of the following ingredients: {}.",
            exclude
        ));
    }
    lines.push(
        "For each recipe, provide a unique, descriptive, and appealing title, a short description, \
         estimated calories, cooking time in minutes, difficulty (Easy, Medium, Hard), a list of \
         ingredients with quantities, and step-by-step instructions. Also include nutritional info \
         (protein, carbs, fat) per serving. Also provide a short, descriptive, English-only title \
         for image generation purposes."
            .to_string(),
    );
    lines.push(format!(
        "The user's language is {0}. The entire response, except for the englishTitle, MUST be in {0}.",
        language
    ));
    lines.push(
        "Ensure the JSON is perfectly formatted with no unterminated strings or trailing commas."
            .to_string(),
    );
    lines.join("\n")
}

pub fn meal_plan_prompt(diet: Option<&str>, calories: Option<u32>, language: Language) -> String {
    let mut lines = vec![
        "You are a nutrition expert AI. Generate a complete 7-day meal plan.".to_string(),
        "User Preferences:".to_string(),
        format!(
            "- Language: {0}. The entire response, including day names, MUST be in {0}.",
            language
        ),
    ];
    if let Some(diet) = non_empty(diet) {
        lines.push(format!("- Diet: {}", diet));
    }
    if let Some(calories) = calories.filter(|c| *c > 0) {
        lines.push(format!("- Daily Calorie Goal: Approximately {} kcal.", calories));
    }
    lines.push(
        "For each day of the week (e.g., Monday, Tuesday...), provide distinct meal suggestions \
         for Breakfast, Lunch, and Dinner."
            .to_string(),
    );
    lines.push(
        "For each meal, you must provide a creative and appealing 'title', a brief 'description' \
         of the meal and an estimated 'calories' count as a number."
            .to_string(),
    );
    lines.push("Return the response as a perfectly formatted JSON array.".to_string());
    lines.join("\n")
}

pub fn translation_prompt(content: &TranslatedContent, language: Language) -> Result<String, GeminiError> {
    let payload = serde_json::to_string(content).map_err(serialization_error)?;
    Ok(format!(
        "Translate the following recipe content to {}. Maintain the original JSON structure.\n{}",
        language, payload
    ))
}

pub fn stores_prompt(items: &[ShoppingListItem], language: Language) -> String {
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    format!(
        "Based on the user's location and this shopping list: [{}], find the best nearby grocery \
         stores. Provide a brief, helpful summary in {} of why these are good options, and list a \
         few relevant stores.",
        names.join(", "),
        language
    )
}

// ============================================================================
// Schemas
// ============================================================================

fn meal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "calories": { "type": "NUMBER" },
        },
        "required": ["title", "description", "calories"],
    })
}

pub fn recipe_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "englishTitle": { "type": "STRING" },
                "description": { "type": "STRING" },
                "calories": { "type": "NUMBER" },
                "cookingTime": { "type": "NUMBER" },
                "difficulty": { "type": "STRING" },
                "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
                "instructions": { "type": "ARRAY", "items": { "type": "STRING" } },
                "protein": { "type": "NUMBER" },
                "carbs": { "type": "NUMBER" },
                "fat": { "type": "NUMBER" },
            },
            "required": [
                "title", "englishTitle", "description", "calories", "cookingTime",
                "difficulty", "ingredients", "instructions", "protein", "carbs", "fat"
            ],
        },
    })
}

pub fn meal_plan_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "day": { "type": "STRING" },
                "breakfast": meal_schema(),
                "lunch": meal_schema(),
                "dinner": meal_schema(),
            },
            "required": ["day", "breakfast", "lunch", "dinner"],
        },
    })
}

pub fn translation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
            "instructions": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": ["title", "description", "ingredients", "instructions"],
    })
}

// ============================================================================
// Parsing
// ============================================================================

/// Recipes with fresh ids, no image and `ai-generated` source
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, GeminiError> {
    let generated: Vec<GeneratedRecipe> =
        serde_json::from_str(clean_json_text(text)).map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;
    Ok(generated.into_iter().map(Recipe::from).collect())
}

pub fn parse_meal_plan(text: &str) -> Result<Vec<MealPlanDay>, GeminiError> {
    serde_json::from_str(clean_json_text(text)).map_err(|e| GeminiError::InvalidResponse(e.to_string()))
}

pub fn parse_translation(text: &str) -> Result<TranslatedContent, GeminiError> {
    serde_json::from_str(clean_json_text(text)).map_err(|e| GeminiError::InvalidResponse(e.to_string()))
}

// ============================================================================
// Gateway
// ============================================================================

pub struct AiGateway {
    client: Arc<dyn AiClient>,
}

impl AiGateway {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    pub async fn generate_recipes(
        &self,
        request: &GenerateRecipesRequest,
        language: Language,
    ) -> Outcome<Vec<Recipe>> {
        if !self.is_configured() {
            return Outcome::degraded(Vec::new(), Notice::error(AI_UNAVAILABLE));
        }

        let prompt = recipe_prompt(request, language);
        let result = async {
            let text = self.client.generate_json(&prompt, &recipe_schema()).await?;
            parse_recipes(&text)
        }
        .await;

        match result {
            Ok(recipes) => {
                info!(count = recipes.len(), language = %language, "Recipes generated");
                Outcome::ok(recipes)
            }
            Err(e) => {
                error!(error = %e, "Error generating recipes");
                Outcome::degraded(Vec::new(), Notice::error(RECIPES_FAILED))
            }
        }
    }

    pub async fn generate_image(
        &self,
        subject: &str,
        is_premium: bool,
        style: ImageStyle,
        aspect_ratio: &str,
    ) -> Outcome<Option<String>> {
        if !self.is_configured() {
            return Outcome::degraded(None, Notice::error(AI_UNAVAILABLE));
        }

        let request = if is_premium {
            ImageRequest {
                prompt: style.premium_prompt(subject),
                tier: ImageTier::Premium {
                    aspect_ratio: aspect_ratio.to_string(),
                },
            }
        } else {
            ImageRequest {
                prompt: style.standard_prompt(subject),
                tier: ImageTier::Standard,
            }
        };

        match self.client.generate_image(&request).await {
            Ok(Some(uri)) => Outcome::ok(Some(uri)),
            Ok(None) => {
                warn!(subject = %subject, "Image model returned no image");
                Outcome::ok(None)
            }
            Err(e) => {
                error!(error = %e, subject = %subject, "Error generating image");
                Outcome::degraded(None, Notice::error(IMAGE_FAILED))
            }
        }
    }

    /// Starts one task per recipe. Each task reports the recipe id and the
    /// resulting image; a call that yields nothing reports [`RecipeImage::Failed`].
    pub fn generate_images_for_recipes<F, Fut>(
        self: &Arc<Self>,
        recipes: &[Recipe],
        is_premium: bool,
        on_update: F,
    ) -> Vec<JoinHandle<()>>
    where
        F: Fn(String, RecipeImage) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let on_update = Arc::new(on_update);
        recipes
            .iter()
            .map(|recipe| {
                let gateway = Arc::clone(self);
                let on_update = Arc::clone(&on_update);
                let recipe_id = recipe.id.clone();
                let subject = recipe.english_title.clone();
                tokio::spawn(async move {
                    let outcome = gateway
                        .generate_image(&subject, is_premium, ImageStyle::Default, DEFAULT_ASPECT_RATIO)
                        .await;
                    let image = match outcome.value {
                        Some(uri) => RecipeImage::Ready(uri),
                        None => RecipeImage::Failed,
                    };
                    on_update(recipe_id, image).await;
                })
            })
            .collect()
    }

    pub async fn generate_meal_plan(
        &self,
        diet: Option<&str>,
        calories: Option<u32>,
        language: Language,
    ) -> Outcome<Vec<MealPlanDay>> {
        if !self.is_configured() {
            return Outcome::degraded(Vec::new(), Notice::error(AI_UNAVAILABLE));
        }

        let prompt = meal_plan_prompt(diet, calories, language);
        let result = async {
            let text = self.client.generate_json(&prompt, &meal_plan_schema()).await?;
            parse_meal_plan(&text)
        }
        .await;

        match result {
            Ok(plan) => {
                info!(days = plan.len(), language = %language, "Meal plan generated");
                Outcome::ok(plan)
            }
            Err(e) => {
                error!(error = %e, "Error generating meal plan");
                Outcome::degraded(Vec::new(), Notice::error(MEAL_PLAN_FAILED))
            }
        }
    }

    /// The recipe with localized content, or the original on failure
    pub async fn translate_recipe(&self, recipe: &Recipe, language: Language) -> Outcome<Recipe> {
        if !self.is_configured() {
            return Outcome::degraded(recipe.clone(), Notice::error(AI_UNAVAILABLE));
        }

        let result = async {
            let prompt = translation_prompt(&TranslatedContent::of(recipe), language)?;
            let text = self.client.generate_json(&prompt, &translation_schema()).await?;
            parse_translation(&text)
        }
        .await;

        match result {
            Ok(translated) => {
                info!(recipe_id = %recipe.id, language = %language, "Recipe translated");
                Outcome::ok(translated.apply_to(recipe))
            }
            Err(e) => {
                error!(error = %e, recipe_id = %recipe.id, "Error translating recipe");
                Outcome::degraded(recipe.clone(), Notice::error(TRANSLATION_FAILED))
            }
        }
    }

    pub async fn find_nearby_stores(
        &self,
        latitude: f64,
        longitude: f64,
        shopping_list: &[ShoppingListItem],
        language: Language,
    ) -> Outcome<StoreSearchResult> {
        if !self.is_configured() {
            return Outcome::ok(StoreSearchResult::summary_only(AI_UNAVAILABLE));
        }
        if shopping_list.is_empty() {
            return Outcome::ok(StoreSearchResult::summary_only(STORES_EMPTY_LIST));
        }

        let prompt = stores_prompt(shopping_list, language);
        match self.client.grounded_search(&prompt, latitude, longitude).await {
            Ok(answer) => {
                info!(sources = answer.sources.len(), "Nearby stores found");
                Outcome::ok(StoreSearchResult {
                    summary: answer.text,
                    sources: answer.sources,
                })
            }
            Err(e) => {
                error!(error = %e, "Error finding nearby stores");
                Outcome::degraded(
                    StoreSearchResult::summary_only(STORES_ERROR_SUMMARY),
                    Notice::error(STORES_FAILED),
                )
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::services::gemini::GroundedAnswer;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Canned responses; a `None` field makes that call fail
    #[derive(Default)]
    pub struct FakeAiClient {
        pub configured: bool,
        pub json: Option<String>,
        pub image: Option<Option<String>>,
        pub grounded: Option<GroundedAnswer>,
        pub prompts: Mutex<Vec<String>>,
        pub image_requests: Mutex<Vec<ImageRequest>>,
    }

    impl FakeAiClient {
        pub fn configured() -> Self {
            Self {
                configured: true,
                ..Self::default()
            }
        }

        pub fn with_json(mut self, json: impl Into<String>) -> Self {
            self.json = Some(json.into());
            self
        }

        pub fn with_image(mut self, image: Option<&str>) -> Self {
            self.image = Some(image.map(str::to_string));
            self
        }

        pub fn with_grounded(mut self, answer: GroundedAnswer) -> Self {
            self.grounded = Some(answer);
            self
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl AiClient for FakeAiClient {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate_json(&self, prompt: &str, _schema: &Value) -> Result<String, GeminiError> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            self.json
                .clone()
                .ok_or_else(|| GeminiError::RequestFailed("HTTP 500".to_string()))
        }

        async fn generate_image(&self, request: &ImageRequest) -> Result<Option<String>, GeminiError> {
            if let Ok(mut requests) = self.image_requests.lock() {
                requests.push(request.clone());
            }
            self.image
                .clone()
                .ok_or_else(|| GeminiError::RequestFailed("HTTP 500".to_string()))
        }

        async fn grounded_search(
            &self,
            prompt: &str,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<GroundedAnswer, GeminiError> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            self.grounded.clone().ok_or(GeminiError::RateLimitExceeded)
        }
    }

    pub fn gateway(client: FakeAiClient) -> Arc<AiGateway> {
        Arc::new(AiGateway::new(Arc::new(client)))
    }

    pub const TWO_RECIPES: &str = r#"[
        {"title":"Tomato Pasta","englishTitle":"Tomato Pasta","description":"Quick.","calories":520,
         "cookingTime":25,"difficulty":"Easy","ingredients":["200g pasta","3 tomatoes"],
         "instructions":["Boil pasta for 10 minutes","Mix"],"protein":18,"carbs":80,"fat":12},
        {"title":"Basil Omelette","englishTitle":"Basil Omelette","description":"Fluffy.","calories":300,
         "cookingTime":10,"difficulty":"Medium","ingredients":["3 eggs","basil"],
         "instructions":["Whisk","Fry"],"protein":20,"carbs":2,"fat":22}
    ]"#;
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::recipes::models::{AdvancedSearch, CookingTime, RecipeFilters, SourceType};
    use crate::services::gemini::GroundedAnswer;
    use crate::recipes::models::StoreSource;
    use std::sync::Mutex as StdMutex;

    fn request(ingredients: &str) -> GenerateRecipesRequest {
        GenerateRecipesRequest {
            ingredients: ingredients.to_string(),
            search_query: None,
            filters: RecipeFilters::default(),
            advanced: AdvancedSearch::default(),
            generate_images: false,
        }
    }

    fn list_item(name: &str) -> ShoppingListItem {
        ShoppingListItem {
            id: format!("S_{}", name),
            name: name.to_string(),
            quantity: "1".to_string(),
            category: String::new(),
            checked: false,
        }
    }

    #[test]
    fn test_recipe_prompt_includes_filters() {
        let mut req = request("eggs, basil");
        req.filters.number_of_recipes = 5;
        req.filters.diet = Some("vegetarian".to_string());
        req.filters.cooking_time = Some(CookingTime::Fast);
        req.advanced.exclude = Some("peanuts".to_string());

        let prompt = recipe_prompt(&req, Language::Fr);
        assert!(prompt.contains("Generate 5 unique"));
        assert!(prompt.contains("The user has these ingredients: eggs, basil."));
        assert!(prompt.contains("vegetarian diet"));
        assert!(prompt.contains("less than 30 minutes"));
        assert!(prompt.contains("MUST NOT include any of the following ingredients: peanuts"));
        assert!(prompt.contains(Language::Fr.cuisine_context()));
        assert!(prompt.contains("MUST be in fr"));
    }

    #[test]
    fn test_search_query_takes_priority() {
        let mut req = request("eggs");
        req.search_query = Some("Vegan Tacos".to_string());
        let prompt = recipe_prompt(&req, Language::En);
        assert!(prompt.contains("specifically searching for: \"Vegan Tacos\""));
        assert!(!prompt.contains("The user has these ingredients"));
    }

    #[test]
    fn test_parse_recipes_assigns_fresh_ids() {
        let recipes = parse_recipes(TWO_RECIPES).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_ne!(recipes[0].id, recipes[1].id);
        assert!(recipes.iter().all(|r| r.image.is_pending() && !r.is_saved));
        assert_eq!(recipes[0].source_type, Some(SourceType::AiGenerated));
    }

    #[test]
    fn test_parse_recipes_rejects_missing_fields() {
        let missing_fat = r#"[{"title":"X","englishTitle":"X","description":"d","calories":1,
            "cookingTime":1,"difficulty":"Easy","ingredients":[],"instructions":[],"protein":1,"carbs":1}]"#;
        assert!(parse_recipes(missing_fat).is_err());
        assert!(parse_recipes("not json").is_err());
    }

    #[test]
    fn test_parse_meal_plan_requires_all_meals() {
        let meal = r#"{"title":"Oats","description":"Warm","calories":350}"#;
        let full = format!(
            r#"[{{"day":"Monday","breakfast":{0},"lunch":{0},"dinner":{0}}}]"#,
            meal
        );
        assert_eq!(parse_meal_plan(&full).unwrap().len(), 1);

        let no_dinner = format!(r#"[{{"day":"Monday","breakfast":{0},"lunch":{0}}}]"#, meal);
        assert!(parse_meal_plan(&no_dinner).is_err());
    }

    #[tokio::test]
    async fn test_generate_recipes_success() {
        let gateway = gateway(FakeAiClient::configured().with_json(TWO_RECIPES));
        let outcome = gateway.generate_recipes(&request("tomato"), Language::En).await;
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.value.len(), 2);
    }

    #[tokio::test]
    async fn test_generate_recipes_failure_is_neutral() {
        let gateway = gateway(FakeAiClient::configured());
        let outcome = gateway.generate_recipes(&request("tomato"), Language::En).await;
        assert!(outcome.value.is_empty());
        assert_eq!(outcome.notice.map(|n| n.message).as_deref(), Some(RECIPES_FAILED));

        let malformed = super::testing::gateway(FakeAiClient::configured().with_json("[{\"title\":1}]"));
        let outcome = malformed.generate_recipes(&request("tomato"), Language::En).await;
        assert!(outcome.is_degraded());
        assert!(outcome.value.is_empty());
    }

    #[tokio::test]
    async fn test_premium_image_uses_style_prompt_and_ratio() {
        let client = Arc::new(FakeAiClient::configured().with_image(Some("data:image/jpeg;base64,AA")));
        let gateway = AiGateway::new(client.clone());

        let outcome = gateway
            .generate_image("Tomato Pasta", true, ImageStyle::Rustic, "16:9")
            .await;
        assert_eq!(outcome.value.as_deref(), Some("data:image/jpeg;base64,AA"));

        let requests = client.image_requests.lock().unwrap();
        assert_eq!(
            requests[0].tier,
            ImageTier::Premium {
                aspect_ratio: "16:9".to_string()
            }
        );
        assert!(requests[0].prompt.starts_with("Rustic, cozy"));
    }

    #[tokio::test]
    async fn test_images_for_recipes_report_each_id() {
        let recipes = parse_recipes(TWO_RECIPES).unwrap();
        let gateway = gateway(FakeAiClient::configured().with_image(Some("data:image/png;base64,AA")));
        let seen = Arc::new(StdMutex::new(Vec::new()));

        let sink = seen.clone();
        let handles = gateway.generate_images_for_recipes(&recipes, false, move |id, image| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push((id, image));
            }
        });
        for handle in handles {
            handle.await.unwrap();
        }

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        for recipe in &recipes {
            assert!(seen.iter().any(|(id, image)| id == &recipe.id
                && *image == RecipeImage::Ready("data:image/png;base64,AA".to_string())));
        }
    }

    #[tokio::test]
    async fn test_failed_image_marks_error() {
        let recipes = parse_recipes(TWO_RECIPES).unwrap();
        let gateway = gateway(FakeAiClient::configured());
        let seen = Arc::new(StdMutex::new(Vec::new()));

        let sink = seen.clone();
        let handles = gateway.generate_images_for_recipes(&recipes[..1], true, move |id, image| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push((id, image));
            }
        });
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[(recipes[0].id.clone(), RecipeImage::Failed)]
        );
    }

    #[tokio::test]
    async fn test_translation_keeps_id_and_falls_back() {
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        let translated = r#"{"title":"Pâtes","description":"Rapide.","ingredients":["pâtes"],"instructions":["Cuire"]}"#;

        let gateway_ok = gateway(FakeAiClient::configured().with_json(translated));
        let outcome = gateway_ok.translate_recipe(&recipe, Language::Fr).await;
        assert_eq!(outcome.value.id, recipe.id);
        assert_eq!(outcome.value.title, "Pâtes");
        assert_eq!(outcome.value.calories, recipe.calories);

        let gateway_err = gateway(FakeAiClient::configured());
        let outcome = gateway_err.translate_recipe(&recipe, Language::Fr).await;
        assert_eq!(outcome.value, recipe);
        assert_eq!(outcome.notice.map(|n| n.message).as_deref(), Some(TRANSLATION_FAILED));
    }

    #[tokio::test]
    async fn test_stores_short_circuits() {
        let unconfigured = gateway(FakeAiClient::default());
        let outcome = unconfigured
            .find_nearby_stores(1.0, 2.0, &[list_item("Milk")], Language::En)
            .await;
        assert_eq!(outcome.value.summary, AI_UNAVAILABLE);

        let client = Arc::new(FakeAiClient::configured());
        let gateway = AiGateway::new(client.clone());
        let outcome = gateway.find_nearby_stores(1.0, 2.0, &[], Language::En).await;
        assert_eq!(outcome.value.summary, STORES_EMPTY_LIST);
        assert!(client.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_stores_success_and_failure() {
        let answer = GroundedAnswer {
            text: "Two good options.".to_string(),
            sources: vec![StoreSource {
                title: "Fresh Mart".to_string(),
                uri: "https://maps.google.com/?cid=9".to_string(),
            }],
        };
        let client = Arc::new(FakeAiClient::configured().with_grounded(answer));
        let gateway_ok = AiGateway::new(client.clone());
        let outcome = gateway_ok
            .find_nearby_stores(23.8, 90.4, &[list_item("Milk"), list_item("Eggs")], Language::Bn)
            .await;
        assert_eq!(outcome.value.sources.len(), 1);
        assert!(client.prompts()[0].contains("[Milk, Eggs]"));

        let gateway_err = gateway(FakeAiClient::configured());
        let outcome = gateway_err
            .find_nearby_stores(23.8, 90.4, &[list_item("Milk")], Language::En)
            .await;
        assert_eq!(outcome.value.summary, STORES_ERROR_SUMMARY);
        assert!(outcome.value.sources.is_empty());
        assert_eq!(outcome.notice.map(|n| n.message).as_deref(), Some(STORES_FAILED));
    }
}

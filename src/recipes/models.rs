// src/recipes/models.rs

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::OnceLock;

use crate::common::generate_recipe_id;
use crate::i18n::Language;
use crate::kitchen::models::{PantryItem, ShoppingListItem};

/// Literal stored in `image` when generation failed
pub const IMAGE_ERROR_SENTINEL: &str = "error";

/// Image slot of a recipe: not generated yet, generated, or failed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecipeImage {
    #[default]
    Pending,
    Ready(String),
    Failed,
}

impl RecipeImage {
    pub fn is_pending(&self) -> bool {
        matches!(self, RecipeImage::Pending)
    }
}

impl From<Option<String>> for RecipeImage {
    fn from(value: Option<String>) -> Self {
        match value {
            None => RecipeImage::Pending,
            Some(s) if s == IMAGE_ERROR_SENTINEL => RecipeImage::Failed,
            Some(s) => RecipeImage::Ready(s),
        }
    }
}

impl Serialize for RecipeImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecipeImage::Pending => serializer.serialize_none(),
            RecipeImage::Ready(uri) => serializer.serialize_str(uri),
            RecipeImage::Failed => serializer.serialize_str(IMAGE_ERROR_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for RecipeImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(RecipeImage::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

// Models sometimes localize the difficulty word; anything unrecognized reads as Medium.
impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Difficulty::parse(&raw).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    AiGenerated,
    External,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub english_title: String,
    pub description: String,
    pub calories: f64,
    pub cooking_time: f64,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub image: RecipeImage,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Recipe exactly as the model returns it. Every field is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub title: String,
    pub english_title: String,
    pub description: String,
    pub calories: f64,
    pub cooking_time: f64,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<GeneratedRecipe> for Recipe {
    fn from(r: GeneratedRecipe) -> Self {
        Self {
            id: generate_recipe_id(),
            title: r.title,
            english_title: r.english_title,
            description: r.description,
            calories: r.calories,
            cooking_time: r.cooking_time,
            difficulty: r.difficulty,
            ingredients: r.ingredients,
            instructions: r.instructions,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            image: RecipeImage::Pending,
            is_saved: false,
            source_type: Some(SourceType::AiGenerated),
            source_url: None,
        }
    }
}

/// Localized fields of a recipe returned by the translation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedContent {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl TranslatedContent {
    pub fn of(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }

    /// Copy of `recipe` with the localized fields swapped in; id and the rest are kept
    pub fn apply_to(&self, recipe: &Recipe) -> Recipe {
        Recipe {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            ..recipe.clone()
        }
    }
}

// ============================================================================
// Generation requests
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookingTime {
    Fast,
    Medium,
    Long,
}

impl CookingTime {
    pub fn prompt_hint(&self) -> &'static str {
        match self {
            CookingTime::Fast => "It should take less than 30 minutes to cook.",
            CookingTime::Medium => "It should take between 30 and 60 minutes to cook.",
            CookingTime::Long => "It should take more than 60 minutes to cook.",
        }
    }
}

fn default_recipe_count() -> u32 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilters {
    #[serde(default = "default_recipe_count")]
    pub number_of_recipes: u32,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<CookingTime>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Default for RecipeFilters {
    fn default() -> Self {
        Self {
            number_of_recipes: default_recipe_count(),
            meal_type: None,
            diet: None,
            cuisine: None,
            cooking_time: None,
            difficulty: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearch {
    #[serde(default)]
    pub must_have: Option<String>,
    #[serde(default)]
    pub exclude: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub filters: RecipeFilters,
    #[serde(default)]
    pub advanced: AdvancedSearch,
    #[serde(default = "default_true")]
    pub generate_images: bool,
}

impl GenerateRecipesRequest {
    /// Text recorded in history: the search query when present, otherwise the ingredients
    pub fn history_query(&self) -> String {
        match self.search_query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => self.ingredients.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageStyle {
    #[default]
    Default,
    Studio,
    Rustic,
    Minimalist,
    TopDown,
}

impl ImageStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStyle::Default => "default",
            ImageStyle::Studio => "studio",
            ImageStyle::Rustic => "rustic",
            ImageStyle::Minimalist => "minimalist",
            ImageStyle::TopDown => "top-down",
        }
    }

    /// Full prompt for the premium image model
    pub fn premium_prompt(&self, subject: &str) -> String {
        match self {
            ImageStyle::Default => format!(
                "High-quality, professional studio food photography of: {subject}. Cinematic lighting, delicious-looking, garnished."
            ),
            ImageStyle::Studio => format!(
                "Studio quality, professional food photography of: {subject}. Clean background, dramatic lighting, vibrant colors."
            ),
            ImageStyle::Rustic => format!(
                "Rustic, cozy, homemade-style food photography of: {subject}. Natural light, wooden table, warm tones."
            ),
            ImageStyle::Minimalist => format!(
                "Minimalist, clean food photography of: {subject}. Simple composition, neutral color palette, focus on the food."
            ),
            ImageStyle::TopDown => format!(
                "Top-down flat lay food photography of: {subject}. Artfully arranged on a clean surface."
            ),
        }
    }

    pub fn standard_prompt(&self, subject: &str) -> String {
        format!("A {} style food photography of: {subject}.", self.as_str())
    }
}

pub const SUPPORTED_ASPECT_RATIOS: [&str; 3] = ["1:1", "16:9", "4:3"];
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub style: ImageStyle,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    pub language: Language,
}

// ============================================================================
// Meal planner
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub title: String,
    pub description: String,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanDay {
    pub day: String,
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealPlanRequest {
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub calories: Option<u32>,
}

// ============================================================================
// Store assistant
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSource {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSearchResult {
    pub summary: String,
    pub sources: Vec<StoreSource>,
}

impl StoreSearchResult {
    pub fn summary_only(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            sources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyStoresRequest {
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// Missing ingredients
// ============================================================================

/// Ingredients whose text does not contain the name of any pantry item (case-insensitive)
pub fn missing_ingredients(ingredients: &[String], pantry: &[PantryItem]) -> Vec<String> {
    let names: Vec<String> = pantry
        .iter()
        .map(|p| p.name.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect();

    ingredients
        .iter()
        .filter(|ingredient| {
            let ingredient = ingredient.to_lowercase();
            !names.iter().any(|name| ingredient.contains(name.as_str()))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingIngredientsResponse {
    pub recipe_id: String,
    pub missing: Vec<String>,
    pub available: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMissingResponse {
    pub added: usize,
    pub message: String,
    pub shopping_list: Vec<ShoppingListItem>,
}

// ============================================================================
// Cooking steps
// ============================================================================

fn step_time_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)(\d+)\s*(minutes|minute|min|hours|hour|hr)").ok())
        .as_ref()
}

/// Seconds mentioned in an instruction step ("simmer for 10 minutes" -> 600)
pub fn step_duration_seconds(instruction: &str) -> Option<u32> {
    let caps = step_time_pattern()?.captures(instruction)?;
    let value: u32 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str().to_lowercase();
    if unit.starts_with("hour") || unit.starts_with("hr") {
        value.checked_mul(3600)
    } else {
        value.checked_mul(60)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingStep {
    pub index: usize,
    pub text: String,
    pub timer_seconds: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub steps: Vec<CookingStep>,
}

impl RecipeDetails {
    pub fn new(recipe: Recipe) -> Self {
        let steps = recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(index, text)| CookingStep {
                index,
                text: text.clone(),
                timer_seconds: step_duration_seconds(text),
            })
            .collect();
        Self { recipe, steps }
    }
}

// src/recipes/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

/// Upper bound on recipes per generation request
pub const MAX_RECIPES_PER_REQUEST: u32 = 10;

pub struct GenerateRecipesValidator;

impl Validator<GenerateRecipesRequest> for GenerateRecipesValidator {
    fn validate(&self, data: &GenerateRecipesRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.history_query().is_empty() {
            result.add_error("ingredients", "Ingredients or a search query are required");
        }
        result.max_len("ingredients", &data.ingredients, 2000);

        let count = data.filters.number_of_recipes;
        if count == 0 || count > MAX_RECIPES_PER_REQUEST {
            result.add_error(
                "numberOfRecipes",
                &format!("Number of recipes must be between 1 and {}", MAX_RECIPES_PER_REQUEST),
            );
        }

        result
    }
}

pub struct ImageRequestValidator;

impl Validator<GenerateImageRequest> for ImageRequestValidator {
    fn validate(&self, data: &GenerateImageRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        if let Some(ratio) = &data.aspect_ratio {
            if !SUPPORTED_ASPECT_RATIOS.contains(&ratio.as_str()) {
                result.add_error(
                    "aspectRatio",
                    &format!("Aspect ratio must be one of {}", SUPPORTED_ASPECT_RATIOS.join(", ")),
                );
            }
        }
        result
    }
}

pub struct MealPlanValidator;

impl Validator<MealPlanRequest> for MealPlanValidator {
    fn validate(&self, data: &MealPlanRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        if data.calories == Some(0) {
            result.add_error("calories", "Daily calories must be positive");
        }
        result
    }
}

pub struct NearbyStoresValidator;

impl Validator<NearbyStoresRequest> for NearbyStoresValidator {
    fn validate(&self, data: &NearbyStoresRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        if !(-90.0..=90.0).contains(&data.latitude) {
            result.add_error("latitude", "Latitude must be between -90 and 90");
        }
        if !(-180.0..=180.0).contains(&data.longitude) {
            result.add_error("longitude", "Longitude must be between -180 and 180");
        }
        result
    }
}

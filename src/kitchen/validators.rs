// src/kitchen/validators.rs

use chrono::NaiveDate;

use super::models::*;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Pantry Validators
// ============================================================================

pub struct PantryItemValidator;

impl Validator<NewPantryItem> for PantryItemValidator {
    fn validate(&self, data: &NewPantryItem) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require("name", &data.name, "Item name is required");
        result.max_len("name", &data.name, 200);
        result.require("quantity", &data.quantity, "Quantity is required");

        if data.expiry_date.trim().is_empty() {
            result.add_error("expiryDate", "Expiry date is required");
        } else if !is_valid_date(&data.expiry_date) {
            result.add_error("expiryDate", "Expiry date must be formatted as YYYY-MM-DD");
        }

        if let Some(notes) = &data.notes {
            result.max_len("notes", notes, 1000);
        }

        result
    }
}

pub struct PantryPatchValidator;

impl Validator<PantryItemPatch> for PantryPatchValidator {
    fn validate(&self, data: &PantryItemPatch) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            result.require("name", name, "Item name cannot be empty");
        }
        if let Some(quantity) = &data.quantity {
            result.require("quantity", quantity, "Quantity cannot be empty");
        }
        if let Some(expiry) = &data.expiry_date {
            if !is_valid_date(expiry) {
                result.add_error("expiryDate", "Expiry date must be formatted as YYYY-MM-DD");
            }
        }

        result
    }
}

// ============================================================================
// Shopping List Validators
// ============================================================================

pub struct ShoppingItemsValidator;

impl Validator<AddShoppingItemsRequest> for ShoppingItemsValidator {
    fn validate(&self, data: &AddShoppingItemsRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.items.is_empty() {
            result.add_error("items", "At least one item is required");
        }
        for (i, item) in data.items.iter().enumerate() {
            result.require(&format!("items[{}].name", i), &item.name, "Item name is required");
        }

        result
    }
}

fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok()
}

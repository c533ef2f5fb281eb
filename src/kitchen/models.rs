// src/kitchen/models.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::common::{generate_history_id, generate_pantry_item_id, generate_shopping_item_id};

/// Most recent history entries kept per user
pub const HISTORY_LIMIT: usize = 50;

/// Days before expiry at which an item is flagged as expiring soon
pub const EXPIRY_WARNING_DAYS: i64 = 7;

// ============================================================================
// Pantry
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub expiry_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPantryItem {
    pub name: String,
    pub quantity: String,
    pub expiry_date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<NewPantryItem> for PantryItem {
    fn from(item: NewPantryItem) -> Self {
        Self {
            id: generate_pantry_item_id(),
            name: item.name.trim().to_string(),
            quantity: item.quantity.trim().to_string(),
            expiry_date: item.expiry_date.trim().to_string(),
            notes: item.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItemPatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub expiry_date: Option<String>,
    pub notes: Option<String>,
}

impl PantryItemPatch {
    pub fn apply(&self, item: &PantryItem) -> PantryItem {
        PantryItem {
            id: item.id.clone(),
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            quantity: self.quantity.clone().unwrap_or_else(|| item.quantity.clone()),
            expiry_date: self
                .expiry_date
                .clone()
                .unwrap_or_else(|| item.expiry_date.clone()),
            notes: self.notes.clone().or_else(|| item.notes.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Expired,
    Soon,
    Fresh,
}

impl PantryItem {
    /// Whole days from `today` until the expiry date, None if the date does not parse
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        NaiveDate::parse_from_str(self.expiry_date.trim(), "%Y-%m-%d")
            .ok()
            .map(|expiry| (expiry - today).num_days())
    }

    pub fn expiry_status(&self, today: NaiveDate) -> Option<ExpiryStatus> {
        self.days_until_expiry(today).map(|days| {
            if days < 0 {
                ExpiryStatus::Expired
            } else if days <= EXPIRY_WARNING_DAYS {
                ExpiryStatus::Soon
            } else {
                ExpiryStatus::Fresh
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PantrySort {
    #[default]
    ExpiryDate,
    NameAsc,
    NameDesc,
}

/// Sorted copy of the pantry. Undated items go last when sorting by expiry.
pub fn sort_pantry(items: &[PantryItem], order: PantrySort) -> Vec<PantryItem> {
    let mut sorted = items.to_vec();
    match order {
        PantrySort::NameAsc => sorted.sort_by_key(|item| item.name.to_lowercase()),
        PantrySort::NameDesc => {
            sorted.sort_by_key(|item| item.name.to_lowercase());
            sorted.reverse();
        }
        PantrySort::ExpiryDate => sorted.sort_by(|a, b| {
            let parse = |item: &PantryItem| {
                NaiveDate::parse_from_str(item.expiry_date.trim(), "%Y-%m-%d").ok()
            };
            match (parse(a), parse(b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
    }
    sorted
}

#[derive(Debug, Deserialize, Default)]
pub struct PantryQuery {
    #[serde(default)]
    pub sort: PantrySort,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryEntry {
    #[serde(flatten)]
    pub item: PantryItem,
    pub days_until_expiry: Option<i64>,
    pub expiry_status: Option<ExpiryStatus>,
}

// ============================================================================
// Shopping list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewShoppingListItem {
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl ShoppingListItem {
    pub fn from_new(item: NewShoppingListItem, default_category: &str) -> Self {
        Self {
            id: generate_shopping_item_id(),
            name: item.name.trim().to_string(),
            quantity: item.quantity.trim().to_string(),
            category: item
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| default_category.to_string()),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShoppingListItemPatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub checked: Option<bool>,
}

impl ShoppingListItemPatch {
    pub fn apply(&self, item: &ShoppingListItem) -> ShoppingListItem {
        ShoppingListItem {
            id: item.id.clone(),
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            quantity: self.quantity.clone().unwrap_or_else(|| item.quantity.clone()),
            category: self.category.clone().unwrap_or_else(|| item.category.clone()),
            checked: self.checked.unwrap_or(item.checked),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddShoppingItemsRequest {
    pub items: Vec<NewShoppingListItem>,
}

#[derive(Debug, Serialize)]
pub struct ShoppingCategory {
    pub category: String,
    pub items: Vec<ShoppingListItem>,
}

/// Groups items by category in order of first appearance
pub fn group_by_category(items: &[ShoppingListItem], uncategorized: &str) -> Vec<ShoppingCategory> {
    let mut groups: Vec<ShoppingCategory> = Vec::new();
    for item in items {
        let category = if item.category.trim().is_empty() {
            uncategorized.to_string()
        } else {
            item.category.clone()
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(ShoppingCategory {
                category,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    pub items: Vec<ShoppingListItem>,
    pub groups: Vec<ShoppingCategory>,
    pub all_checked: bool,
}

impl ShoppingListResponse {
    pub fn new(items: Vec<ShoppingListItem>, uncategorized: &str) -> Self {
        let groups = group_by_category(&items, uncategorized);
        let all_checked = !items.is_empty() && items.iter().all(|i| i.checked);
        Self {
            items,
            groups,
            all_checked,
        }
    }
}

// ============================================================================
// History
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub query: String,
    pub recipe_count: usize,
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    pub fn new(query: &str, recipe_count: usize, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_history_id(),
            query: query.to_string(),
            recipe_count,
            timestamp: now,
        }
    }
}

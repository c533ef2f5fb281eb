// src/kitchen/handlers.rs

use axum::{
    extract::{Json, Path, Query},
    http::StatusCode,
};
use chrono::Utc;
use tracing::{debug, info};

use super::models::*;
use super::validators::{PantryItemValidator, PantryPatchValidator, ShoppingItemsValidator};
use crate::auth::AuthedSession;
use crate::common::{ApiError, Validator};
use crate::i18n::t;

fn pantry_entries(items: &[PantryItem], order: PantrySort) -> Vec<PantryEntry> {
    let today = Utc::now().date_naive();
    sort_pantry(items, order)
        .into_iter()
        .map(|item| PantryEntry {
            days_until_expiry: item.days_until_expiry(today),
            expiry_status: item.expiry_status(today),
            item,
        })
        .collect()
}

async fn shopping_response(
    session: &AuthedSession,
    items: Vec<ShoppingListItem>,
) -> Json<ShoppingListResponse> {
    let uncategorized = t(session.store.language().await, "shopping_list_uncategorized");
    Json(ShoppingListResponse::new(items, &uncategorized))
}

// ============================================================================
// Pantry
// ============================================================================

/// GET /api/pantry?sort=expiry-date|name-asc|name-desc
pub async fn list_pantry(
    session: AuthedSession,
    Query(query): Query<PantryQuery>,
) -> Result<Json<Vec<PantryEntry>>, ApiError> {
    session.require_user().await?;
    let pantry = session.store.snapshot().await.pantry;
    Ok(Json(pantry_entries(&pantry, query.sort)))
}

/// POST /api/pantry
pub async fn add_pantry_item(
    session: AuthedSession,
    Json(payload): Json<NewPantryItem>,
) -> Result<(StatusCode, Json<Vec<PantryEntry>>), ApiError> {
    PantryItemValidator.validate(&payload).into_result()?;
    let user = session.require_user().await?;

    let pantry = session.signed_in(session.store.add_to_pantry(payload).await)?;
    info!(user_id = %user.id, items = pantry.len(), "Pantry item added");
    Ok((
        StatusCode::CREATED,
        Json(pantry_entries(&pantry, PantrySort::default())),
    ))
}

/// PUT /api/pantry/:id
pub async fn update_pantry_item(
    session: AuthedSession,
    Path(item_id): Path<String>,
    Json(patch): Json<PantryItemPatch>,
) -> Result<Json<Vec<PantryEntry>>, ApiError> {
    PantryPatchValidator.validate(&patch).into_result()?;
    session.require_user().await?;

    let exists = session
        .store
        .snapshot()
        .await
        .pantry
        .iter()
        .any(|item| item.id == item_id);
    if !exists {
        return Err(ApiError::NotFound(format!("Pantry item {} not found", item_id)));
    }

    let pantry = session.signed_in(session.store.update_pantry_item(&item_id, &patch).await)?;
    Ok(Json(pantry_entries(&pantry, PantrySort::default())))
}

/// DELETE /api/pantry/:id
///
/// Removing an unknown id leaves the pantry unchanged.
pub async fn delete_pantry_item(
    session: AuthedSession,
    Path(item_id): Path<String>,
) -> Result<Json<Vec<PantryEntry>>, ApiError> {
    session.require_user().await?;
    let pantry = session.signed_in(session.store.remove_pantry_item(&item_id).await)?;
    debug!(item_id = %item_id, "Pantry item removed");
    Ok(Json(pantry_entries(&pantry, PantrySort::default())))
}

// ============================================================================
// Shopping List
// ============================================================================

/// GET /api/shopping-list
pub async fn get_shopping_list(
    session: AuthedSession,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    session.require_user().await?;
    let items = session.store.snapshot().await.shopping_list;
    Ok(shopping_response(&session, items).await)
}

/// POST /api/shopping-list
///
/// # Request Body
/// ```json
/// { "items": [{ "name": "Milk", "quantity": "1 l", "category": "Dairy" }] }
/// ```
pub async fn add_shopping_items(
    session: AuthedSession,
    Json(payload): Json<AddShoppingItemsRequest>,
) -> Result<(StatusCode, Json<ShoppingListResponse>), ApiError> {
    ShoppingItemsValidator.validate(&payload).into_result()?;
    let user = session.require_user().await?;

    let count = payload.items.len();
    let items = session.signed_in(session.store.add_to_shopping_list(payload.items).await)?;
    info!(user_id = %user.id, added = count, "Shopping list items added");
    Ok((StatusCode::CREATED, shopping_response(&session, items).await))
}

/// PUT /api/shopping-list/:id
pub async fn update_shopping_item(
    session: AuthedSession,
    Path(item_id): Path<String>,
    Json(patch): Json<ShoppingListItemPatch>,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    session.require_user().await?;

    let exists = session
        .store
        .snapshot()
        .await
        .shopping_list
        .iter()
        .any(|item| item.id == item_id);
    if !exists {
        return Err(ApiError::NotFound(format!(
            "Shopping list item {} not found",
            item_id
        )));
    }

    let items = session.signed_in(
        session
            .store
            .update_shopping_list_item(&item_id, &patch)
            .await,
    )?;
    Ok(shopping_response(&session, items).await)
}

/// DELETE /api/shopping-list/:id
pub async fn delete_shopping_item(
    session: AuthedSession,
    Path(item_id): Path<String>,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    session.require_user().await?;
    let items = session.signed_in(session.store.remove_shopping_list_item(&item_id).await)?;
    Ok(shopping_response(&session, items).await)
}

/// POST /api/shopping-list/toggle-all
pub async fn toggle_all_shopping_items(
    session: AuthedSession,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    session.require_user().await?;
    let items = session.signed_in(session.store.toggle_all_shopping_list_items().await)?;
    Ok(shopping_response(&session, items).await)
}

// ============================================================================
// History
// ============================================================================

/// GET /api/history
pub async fn get_history(session: AuthedSession) -> Result<Json<Vec<HistoryItem>>, ApiError> {
    session.require_user().await?;
    Ok(Json(session.store.snapshot().await.history))
}

//! The per-session application store
//!
//! Mutators update memory first and hand the whole collection to the
//! session's persist queue. There is no rollback: a failed write is logged
//! and memory stays ahead of storage.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::persist::PersistQueue;
use super::state::{SessionSnapshot, SessionState, UserCollection};
use super::timer::CountdownTimer;
use super::StoreError;
use crate::auth::models::{SubscriptionStatus, UserProfile};
use crate::common::safe_email_log;
use crate::i18n::Language;
use crate::kitchen::models::{
    HistoryItem, NewPantryItem, NewShoppingListItem, PantryItem, PantryItemPatch,
    ShoppingListItem, ShoppingListItemPatch, HISTORY_LIMIT,
};
use crate::recipes::models::{Recipe, RecipeImage, TranslatedContent};
use crate::services::local_storage::{session_language_key, session_user_key};
use crate::services::mock_backend::BackendError;
use crate::services::{LocalStorage, MockBackend};
use crate::subscriptions::models::{PaymentOutcome, PendingPayment, SubmitPaymentRequest};

#[derive(Debug)]
pub struct AppStore {
    session_id: String,
    backend: Arc<MockBackend>,
    storage: LocalStorage,
    state: RwLock<SessionState>,
    writer: PersistQueue,
    pub timer: CountdownTimer,
}

impl AppStore {
    pub fn new(session_id: &str, backend: Arc<MockBackend>, storage: LocalStorage) -> Self {
        let writer = PersistQueue::spawn(Arc::clone(&backend), session_id.to_string());
        Self {
            session_id: session_id.to_string(),
            backend,
            storage,
            state: RwLock::new(SessionState::default()),
            writer,
            timer: CountdownTimer::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn session_snapshot(&self) -> SessionSnapshot {
        let timer = self.timer.snapshot().await;
        SessionSnapshot::new(&*self.state.read().await, timer)
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.state.read().await.user().cloned()
    }

    pub async fn language(&self) -> Language {
        self.state.read().await.language
    }

    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    /// Rebuilds state from the persisted session keys. Returns true when a
    /// signed-in user was restored. The new state replaces the old in one step.
    pub async fn bootstrap(&self) -> Result<bool, StoreError> {
        let all_users = self.backend.get_all_users().await?;
        let user_key = session_user_key(&self.session_id);

        let saved_user_id = self
            .storage
            .get_item(&user_key)
            .await
            .map_err(BackendError::from)?;
        let language = self
            .storage
            .get_item(&session_language_key(&self.session_id))
            .await
            .map_err(BackendError::from)?
            .and_then(|code| code.parse::<Language>().ok())
            .unwrap_or_default();

        let mut next = SessionState {
            all_users,
            language,
            is_initial_loading: false,
            ..SessionState::default()
        };

        let restored = match saved_user_id {
            Some(user_id) if next.all_users.iter().any(|u| u.id == user_id) => {
                let bag = self.backend.load_user_data(&user_id).await?;
                next.load_bag(bag);
                next.current_user_id = Some(user_id);
                if next.user().map(UserProfile::is_admin).unwrap_or(false) {
                    next.pending_payments = self.backend.get_pending_payments().await?;
                }
                true
            }
            Some(stale) => {
                warn!(session_id = %self.session_id, user_id = %stale, "Stored session user no longer exists");
                self.storage
                    .remove_item(&user_key)
                    .await
                    .map_err(BackendError::from)?;
                false
            }
            None => false,
        };

        *self.state.write().await = next;
        debug!(session_id = %self.session_id, restored = restored, "Session bootstrapped");
        Ok(restored)
    }

    async fn enter_session(&self, user: &UserProfile) -> Result<(), StoreError> {
        let all_users = self.backend.get_all_users().await?;
        let bag = self.backend.load_user_data(&user.id).await?;
        let pending_payments = if user.is_admin() {
            self.backend.get_pending_payments().await?
        } else {
            Vec::new()
        };

        self.storage
            .set_item(&session_user_key(&self.session_id), &user.id)
            .await
            .map_err(BackendError::from)?;

        let mut state = self.state.write().await;
        state.clear_user();
        state.all_users = all_users;
        state.load_bag(bag);
        state.pending_payments = pending_payments;
        state.current_user_id = Some(user.id.clone());
        state.is_initial_loading = false;
        Ok(())
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, StoreError> {
        let user = match self.backend.sign_in_user(email, password).await? {
            Some(user) => user,
            None => {
                warn!(email = %safe_email_log(email), "Sign-in failed: invalid credentials");
                return Err(StoreError::InvalidCredentials);
            }
        };

        self.enter_session(&user).await?;
        info!(session_id = %self.session_id, user_id = %user.id, "User signed in");
        Ok(self.user().await.unwrap_or(user))
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, StoreError> {
        let user = self.backend.sign_up_user(name, email, password).await?;
        self.enter_session(&user).await?;
        Ok(self.user().await.unwrap_or(user))
    }

    /// Clears user state, stops the timer and forgets the stored session user
    pub async fn sign_out(&self) {
        self.flush().await;
        self.timer.stop().await;

        let user_id = {
            let mut state = self.state.write().await;
            let user_id = state.current_user_id.clone();
            state.clear_user();
            user_id
        };

        if let Err(e) = self
            .storage
            .remove_item(&session_user_key(&self.session_id))
            .await
        {
            warn!(session_id = %self.session_id, error = %e, "Failed to remove session key");
        }
        info!(session_id = %self.session_id, user_id = ?user_id, "User signed out");
    }

    /// Ends an idle session: pending writes land, the timer stops and both
    /// session keys are removed so the session cannot be restored
    pub async fn expire(&self) {
        self.flush().await;
        self.timer.stop().await;

        for key in [
            session_user_key(&self.session_id),
            session_language_key(&self.session_id),
        ] {
            if let Err(e) = self.storage.remove_item(&key).await {
                warn!(session_id = %self.session_id, key = %key, error = %e, "Failed to remove session key");
            }
        }
        info!(session_id = %self.session_id, "Session expired");
    }

    pub async fn set_language(&self, language: Language) {
        self.state.write().await.language = language;
        if let Err(e) = self
            .storage
            .set_item(&session_language_key(&self.session_id), language.code())
            .await
        {
            warn!(session_id = %self.session_id, error = %e, "Failed to persist language");
        }
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Replaces one collection and queues its persistence.
    /// None when nobody is signed in.
    async fn mutate<T: UserCollection>(
        &self,
        f: impl FnOnce(&[T]) -> Vec<T>,
    ) -> Option<Vec<T>> {
        let mut state = self.state.write().await;
        let user_id = state.current_user_id.clone()?;
        let slot = T::slot(&mut *state);
        let next = f(slot.as_slice());
        *slot = next.clone();
        self.writer.enqueue(&user_id, T::into_update(next.clone()));
        Some(next)
    }

    pub async fn add_to_history(&self, query: &str, recipe_count: usize) -> Option<Vec<HistoryItem>> {
        let entry = HistoryItem::new(query, recipe_count, Utc::now());
        self.mutate(|history: &[HistoryItem]| {
            std::iter::once(entry)
                .chain(history.iter().cloned())
                .take(HISTORY_LIMIT)
                .collect()
        })
        .await
    }

    pub async fn add_to_shopping_list(
        &self,
        items: Vec<NewShoppingListItem>,
    ) -> Option<Vec<ShoppingListItem>> {
        self.mutate(|list: &[ShoppingListItem]| {
            let mut next = list.to_vec();
            next.extend(items.into_iter().map(|i| ShoppingListItem::from_new(i, "")));
            next
        })
        .await
    }

    pub async fn update_shopping_list_item(
        &self,
        id: &str,
        patch: &ShoppingListItemPatch,
    ) -> Option<Vec<ShoppingListItem>> {
        self.mutate(|list: &[ShoppingListItem]| {
            list.iter()
                .map(|item| if item.id == id { patch.apply(item) } else { item.clone() })
                .collect()
        })
        .await
    }

    pub async fn remove_shopping_list_item(&self, id: &str) -> Option<Vec<ShoppingListItem>> {
        self.mutate(|list: &[ShoppingListItem]| {
            list.iter().filter(|item| item.id != id).cloned().collect()
        })
        .await
    }

    /// Unchecks everything when all items are checked, otherwise checks everything
    pub async fn toggle_all_shopping_list_items(&self) -> Option<Vec<ShoppingListItem>> {
        self.mutate(|list: &[ShoppingListItem]| {
            let all_checked = !list.is_empty() && list.iter().all(|i| i.checked);
            list.iter()
                .map(|item| ShoppingListItem {
                    checked: !all_checked,
                    ..item.clone()
                })
                .collect()
        })
        .await
    }

    pub async fn add_to_pantry(&self, item: NewPantryItem) -> Option<Vec<PantryItem>> {
        let item = PantryItem::from(item);
        self.mutate(|pantry: &[PantryItem]| {
            let mut next = pantry.to_vec();
            next.push(item);
            next
        })
        .await
    }

    pub async fn update_pantry_item(
        &self,
        id: &str,
        patch: &PantryItemPatch,
    ) -> Option<Vec<PantryItem>> {
        self.mutate(|pantry: &[PantryItem]| {
            pantry
                .iter()
                .map(|item| if item.id == id { patch.apply(item) } else { item.clone() })
                .collect()
        })
        .await
    }

    pub async fn remove_pantry_item(&self, id: &str) -> Option<Vec<PantryItem>> {
        self.mutate(|pantry: &[PantryItem]| {
            pantry.iter().filter(|item| item.id != id).cloned().collect()
        })
        .await
    }

    // ========================================================================
    // Recipes
    // ========================================================================

    /// Saves or unsaves the recipe. Returns the new saved flag.
    pub async fn toggle_save_recipe(&self, recipe: &Recipe) -> Option<bool> {
        let mut now_saved = false;
        self.mutate(|saved: &[Recipe]| {
            if saved.iter().any(|r| r.id == recipe.id) {
                saved.iter().filter(|r| r.id != recipe.id).cloned().collect()
            } else {
                now_saved = true;
                let entry = Recipe {
                    is_saved: true,
                    ..recipe.clone()
                };
                std::iter::once(entry).chain(saved.iter().cloned()).collect()
            }
        })
        .await?;

        let mut state = self.state.write().await;
        for generated in state.generated_recipes.iter_mut() {
            if generated.id == recipe.id {
                generated.is_saved = now_saved;
            }
        }
        Some(now_saved)
    }

    pub async fn set_generated_recipes(&self, recipes: Vec<Recipe>) {
        self.state.write().await.generated_recipes = recipes;
    }

    pub async fn generated_recipes(&self) -> Vec<Recipe> {
        self.state.read().await.generated_recipes.clone()
    }

    pub async fn find_recipe(&self, recipe_id: &str) -> Option<Recipe> {
        self.state.read().await.find_recipe(recipe_id).cloned()
    }

    /// Sets the image of a recipe by id in the generated list and, when the
    /// recipe is saved, in the persisted saved copy. False when neither
    /// holds the id.
    pub async fn set_recipe_image(&self, recipe_id: &str, image: RecipeImage) -> bool {
        let (in_generated, in_saved) = {
            let mut state = self.state.write().await;
            let in_generated = match state.generated_recipes.iter_mut().find(|r| r.id == recipe_id) {
                Some(recipe) => {
                    recipe.image = image.clone();
                    true
                }
                None => false,
            };
            let in_saved = state.saved_recipes.iter().any(|r| r.id == recipe_id);
            (in_generated, in_saved)
        };

        if in_saved {
            self.mutate(|saved: &[Recipe]| {
                saved
                    .iter()
                    .map(|r| {
                        if r.id == recipe_id {
                            Recipe {
                                image: image.clone(),
                                ..r.clone()
                            }
                        } else {
                            r.clone()
                        }
                    })
                    .collect()
            })
            .await;
        }
        in_generated || in_saved
    }

    /// Swaps localized content into the recipe wherever it is held
    pub async fn apply_translation(
        &self,
        recipe_id: &str,
        translated: &TranslatedContent,
    ) -> Option<Recipe> {
        let updated = {
            let mut state = self.state.write().await;
            let mut updated = None;
            for recipe in state.generated_recipes.iter_mut() {
                if recipe.id == recipe_id {
                    *recipe = translated.apply_to(recipe);
                    updated = Some(recipe.clone());
                }
            }
            updated
        };

        let is_saved = self
            .state
            .read()
            .await
            .saved_recipes
            .iter()
            .any(|r| r.id == recipe_id);
        if !is_saved {
            return updated;
        }

        let saved = self
            .mutate(|saved: &[Recipe]| {
                saved
                    .iter()
                    .map(|r| if r.id == recipe_id { translated.apply_to(r) } else { r.clone() })
                    .collect()
            })
            .await;

        updated.or_else(|| saved.and_then(|list| list.into_iter().find(|r| r.id == recipe_id)))
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    fn adopt(state: &mut SessionState, outcome: PaymentOutcome) {
        state.all_users = outcome.users;
        if state.user().map(UserProfile::is_admin).unwrap_or(false) {
            state.pending_payments = outcome.pending_payments;
        }
    }

    pub async fn submit_for_premium(
        &self,
        request: SubmitPaymentRequest,
    ) -> Result<PendingPayment, StoreError> {
        let user = self.user().await.ok_or(StoreError::NotSignedIn)?;
        let payment = PendingPayment::new(&user, request, Utc::now());

        let outcome = self.backend.submit_for_premium(payment.clone()).await?;
        Self::adopt(&mut *self.state.write().await, outcome);
        Ok(payment)
    }

    pub async fn approve_payment(&self, payment_id: &str) -> Result<(), StoreError> {
        let result = self.backend.approve_payment(payment_id).await;
        self.settle_decision(result).await
    }

    pub async fn reject_payment(&self, payment_id: &str) -> Result<(), StoreError> {
        let result = self.backend.reject_payment(payment_id).await;
        self.settle_decision(result).await
    }

    /// Adopts an approve/reject outcome. A decision on a payment whose user
    /// is gone still removed the payment, so the queue is reloaded before
    /// the error is returned.
    async fn settle_decision(
        &self,
        result: Result<PaymentOutcome, BackendError>,
    ) -> Result<(), StoreError> {
        match result {
            Ok(outcome) => {
                Self::adopt(&mut *self.state.write().await, outcome);
                Ok(())
            }
            Err(BackendError::UserNotFound(user_id)) => {
                if let Err(e) = self.refresh_pending_payments().await {
                    warn!(session_id = %self.session_id, error = %e, "Failed to reload pending payments");
                }
                Err(BackendError::UserNotFound(user_id).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update_user_subscription_status_by_admin(
        &self,
        user_id: &str,
        status: SubscriptionStatus,
    ) -> Result<Vec<UserProfile>, StoreError> {
        let users = self.backend.update_user_subscription(user_id, status).await?;
        self.state.write().await.all_users = users.clone();
        Ok(users)
    }

    /// Reloads all users, which also applies subscription expiry
    pub async fn refresh_users(&self) -> Result<Vec<UserProfile>, StoreError> {
        let users = self.backend.get_all_users().await?;
        self.state.write().await.all_users = users.clone();
        Ok(users)
    }

    pub async fn refresh_pending_payments(&self) -> Result<Vec<PendingPayment>, StoreError> {
        let pending = self.backend.get_pending_payments().await?;
        self.state.write().await.pending_payments = pending.clone();
        Ok(pending)
    }
}

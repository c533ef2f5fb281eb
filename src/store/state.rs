//! In-memory state of one client session

use serde::Serialize;

use super::timer::TimerState;
use crate::auth::models::{PublicUser, UserProfile};
use crate::i18n::Language;
use crate::kitchen::models::{HistoryItem, PantryItem, ShoppingListItem};
use crate::recipes::models::Recipe;
use crate::services::mock_backend::UserDataBag;
use crate::services::UserDataUpdate;
use crate::subscriptions::models::PendingPayment;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub current_user_id: Option<String>,
    pub all_users: Vec<UserProfile>,
    pub language: Language,
    pub generated_recipes: Vec<Recipe>,
    pub history: Vec<HistoryItem>,
    pub shopping_list: Vec<ShoppingListItem>,
    pub pantry: Vec<PantryItem>,
    pub saved_recipes: Vec<Recipe>,
    pub pending_payments: Vec<PendingPayment>,
    pub is_initial_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_user_id: None,
            all_users: Vec::new(),
            language: Language::default(),
            generated_recipes: Vec::new(),
            history: Vec::new(),
            shopping_list: Vec::new(),
            pantry: Vec::new(),
            saved_recipes: Vec::new(),
            pending_payments: Vec::new(),
            is_initial_loading: true,
        }
    }
}

impl SessionState {
    /// Current user as found in the all-users list
    pub fn user(&self) -> Option<&UserProfile> {
        let id = self.current_user_id.as_deref()?;
        self.all_users.iter().find(|u| u.id == id)
    }

    pub fn load_bag(&mut self, bag: UserDataBag) {
        self.pantry = bag.pantry;
        self.shopping_list = bag.shopping_list;
        self.history = bag.history;
        self.saved_recipes = bag.saved_recipes;
    }

    /// Drops everything tied to the signed-in user; language survives
    pub fn clear_user(&mut self) {
        self.current_user_id = None;
        self.generated_recipes.clear();
        self.history.clear();
        self.shopping_list.clear();
        self.pantry.clear();
        self.saved_recipes.clear();
        self.pending_payments.clear();
    }

    pub fn find_recipe(&self, recipe_id: &str) -> Option<&Recipe> {
        self.generated_recipes
            .iter()
            .chain(self.saved_recipes.iter())
            .find(|r| r.id == recipe_id)
    }
}

/// A per-user collection that is persisted as one unit
pub trait UserCollection: Clone + Send + Sync + 'static {
    fn slot(state: &mut SessionState) -> &mut Vec<Self>;
    fn into_update(items: Vec<Self>) -> UserDataUpdate;
}

impl UserCollection for PantryItem {
    fn slot(state: &mut SessionState) -> &mut Vec<Self> {
        &mut state.pantry
    }

    fn into_update(items: Vec<Self>) -> UserDataUpdate {
        UserDataUpdate::Pantry(items)
    }
}

impl UserCollection for ShoppingListItem {
    fn slot(state: &mut SessionState) -> &mut Vec<Self> {
        &mut state.shopping_list
    }

    fn into_update(items: Vec<Self>) -> UserDataUpdate {
        UserDataUpdate::ShoppingList(items)
    }
}

impl UserCollection for HistoryItem {
    fn slot(state: &mut SessionState) -> &mut Vec<Self> {
        &mut state.history
    }

    fn into_update(items: Vec<Self>) -> UserDataUpdate {
        UserDataUpdate::History(items)
    }
}

impl UserCollection for Recipe {
    fn slot(state: &mut SessionState) -> &mut Vec<Self> {
        &mut state.saved_recipes
    }

    fn into_update(items: Vec<Self>) -> UserDataUpdate {
        UserDataUpdate::SavedRecipes(items)
    }
}

/// Session overview returned by `GET /api/session`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<PublicUser>,
    pub language: Language,
    pub is_initial_loading: bool,
    pub generated_recipes: usize,
    pub saved_recipes: usize,
    pub pantry_items: usize,
    pub shopping_list_items: usize,
    pub history_items: usize,
    pub pending_payments: usize,
    pub timer: TimerState,
}

impl SessionSnapshot {
    pub fn new(state: &SessionState, timer: TimerState) -> Self {
        Self {
            user: state.user().map(PublicUser::from),
            language: state.language,
            is_initial_loading: state.is_initial_loading,
            generated_recipes: state.generated_recipes.len(),
            saved_recipes: state.saved_recipes.len(),
            pantry_items: state.pantry.len(),
            shopping_list_items: state.shopping_list.len(),
            history_items: state.history.len(),
            pending_payments: state.pending_payments.len(),
            timer,
        }
    }
}

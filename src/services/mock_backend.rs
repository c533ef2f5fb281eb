// src/services/mock_backend.rs
//! Simulated backend over a single JSON document
//!
//! Every call sleeps for the configured latency, then reads the whole
//! document, applies its change and writes the whole document back. The
//! read-modify-write of one call is serialized against every other call in
//! the process; sequences of calls are not.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::local_storage::{LocalStorage, APP_DATA_KEY};
use crate::auth::models::{Role, SubscriptionStatus, UserProfile};
use crate::common::config::{SeedAdmin, SeedPaymentMethod};
use crate::common::{generate_user_id, safe_email_log};
use crate::kitchen::models::{HistoryItem, PantryItem, ShoppingListItem};
use crate::recipes::models::Recipe;
use crate::subscriptions::models::{PaymentMethod, PaymentOutcome, PendingPayment};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("email already registered")]
    EmailExists,

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("payment {0} not found")]
    PaymentNotFound(String),
}

/// Per-user collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataBag {
    #[serde(default)]
    pub pantry: Vec<PantryItem>,
    #[serde(default)]
    pub shopping_list: Vec<ShoppingListItem>,
    #[serde(default)]
    pub history: Vec<HistoryItem>,
    #[serde(default)]
    pub saved_recipes: Vec<Recipe>,
}

/// The entire persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDocument {
    #[serde(default)]
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub pending_payments: Vec<PendingPayment>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub user_data: HashMap<String, UserDataBag>,
}

impl AppDocument {
    fn user_mut(&mut self, user_id: &str) -> Option<&mut UserProfile> {
        self.users.iter_mut().find(|u| u.id == user_id)
    }

    /// Demotes lapsed subscriptions, returns true when any user changed
    fn expire_subscriptions(&mut self) -> bool {
        let now = Utc::now();
        let mut changed = false;
        for user in self.users.iter_mut() {
            if user.expire_if_lapsed(now) {
                info!(user_id = %user.id, "Premium subscription expired");
                changed = true;
            }
        }
        changed
    }

    fn set_subscription(
        &mut self,
        user_id: &str,
        status: SubscriptionStatus,
    ) -> Result<(), BackendError> {
        let user = self
            .user_mut(user_id)
            .ok_or_else(|| BackendError::UserNotFound(user_id.to_string()))?;
        user.apply_subscription_status(status, Utc::now());
        Ok(())
    }

    fn payment_outcome(&self) -> PaymentOutcome {
        PaymentOutcome {
            users: self.users.clone(),
            pending_payments: self.pending_payments.clone(),
        }
    }
}

/// Whole-collection replacement for one entry of a user's data bag
#[derive(Debug, Clone)]
pub enum UserDataUpdate {
    Pantry(Vec<PantryItem>),
    ShoppingList(Vec<ShoppingListItem>),
    History(Vec<HistoryItem>),
    SavedRecipes(Vec<Recipe>),
}

impl UserDataUpdate {
    pub fn key(&self) -> &'static str {
        match self {
            UserDataUpdate::Pantry(_) => "pantry",
            UserDataUpdate::ShoppingList(_) => "shoppingList",
            UserDataUpdate::History(_) => "history",
            UserDataUpdate::SavedRecipes(_) => "savedRecipes",
        }
    }

    fn apply(self, bag: &mut UserDataBag) {
        match self {
            UserDataUpdate::Pantry(items) => bag.pantry = items,
            UserDataUpdate::ShoppingList(items) => bag.shopping_list = items,
            UserDataUpdate::History(items) => bag.history = items,
            UserDataUpdate::SavedRecipes(items) => bag.saved_recipes = items,
        }
    }
}

#[derive(Debug)]
pub struct MockBackend {
    storage: LocalStorage,
    latency: Duration,
    document_lock: Mutex<()>,
}

impl MockBackend {
    pub fn new(storage: LocalStorage, latency: Duration) -> Self {
        Self {
            storage,
            latency,
            document_lock: Mutex::new(()),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Missing or unreadable documents yield an empty one
    async fn read_document(&self) -> Result<AppDocument, BackendError> {
        let raw = match self.storage.get_item(APP_DATA_KEY).await? {
            Some(raw) => raw,
            None => return Ok(AppDocument::default()),
        };

        match serde_json::from_str::<AppDocument>(&raw) {
            Ok(document) => Ok(document),
            Err(e) => {
                error!(error = %e, "Failed to parse app document, starting from an empty one");
                Ok(AppDocument::default())
            }
        }
    }

    async fn write_document(&self, document: &AppDocument) -> Result<(), BackendError> {
        let raw = serde_json::to_string(document)?;
        self.storage.set_item(APP_DATA_KEY, &raw).await?;
        Ok(())
    }

    async fn read<R>(&self, f: impl FnOnce(&AppDocument) -> R) -> Result<R, BackendError> {
        self.simulate_latency().await;
        let _guard = self.document_lock.lock().await;
        let document = self.read_document().await?;
        Ok(f(&document))
    }

    /// Runs `f` on the document and writes it back when `f` reports a change
    async fn modify<R>(
        &self,
        f: impl FnOnce(&mut AppDocument) -> (R, bool),
    ) -> Result<R, BackendError> {
        self.simulate_latency().await;
        let _guard = self.document_lock.lock().await;
        let mut document = self.read_document().await?;
        let (result, changed) = f(&mut document);
        if changed {
            self.write_document(&document).await?;
        }
        Ok(result)
    }

    // ========================================================================
    // Initialization
    // ========================================================================

    /// Adds missing admin accounts and, when none exist, default payment methods
    pub async fn seed(
        &self,
        admins: &[SeedAdmin],
        methods: &[SeedPaymentMethod],
    ) -> Result<(), BackendError> {
        let (created_admins, created_methods) = self
            .modify(|doc| {
                let mut created_admins = 0;
                for admin in admins {
                    if doc.users.iter().any(|u| u.email == admin.email) {
                        continue;
                    }
                    doc.users.push(UserProfile {
                        id: generate_user_id(),
                        name: admin.name.clone(),
                        email: admin.email.clone(),
                        password: admin.password.clone(),
                        role: Role::Admin,
                        subscription_status: SubscriptionStatus::Active,
                        premium_since: None,
                        premium_renewal_date: None,
                    });
                    created_admins += 1;
                }

                let mut created_methods = 0;
                if doc.payment_methods.is_empty() {
                    doc.payment_methods = methods
                        .iter()
                        .map(|m| PaymentMethod::new(&m.name, &m.details))
                        .collect();
                    created_methods = doc.payment_methods.len();
                }

                let changed = created_admins > 0 || created_methods > 0;
                ((created_admins, created_methods), changed)
            })
            .await?;

        info!(
            admins = created_admins,
            payment_methods = created_methods,
            "Mock backend seeded"
        );
        Ok(())
    }

    // ========================================================================
    // Payment methods
    // ========================================================================

    pub async fn get_payment_methods(&self) -> Result<Vec<PaymentMethod>, BackendError> {
        self.read(|doc| doc.payment_methods.clone()).await
    }

    pub async fn add_payment_method(
        &self,
        name: &str,
        details: &str,
    ) -> Result<Vec<PaymentMethod>, BackendError> {
        let method = PaymentMethod::new(name, details);
        debug!(method_id = %method.id, name = %method.name, "Adding payment method");
        self.modify(|doc| {
            doc.payment_methods.push(method);
            (doc.payment_methods.clone(), true)
        })
        .await
    }

    /// Deleting an unknown id leaves the list unchanged
    pub async fn delete_payment_method(
        &self,
        method_id: &str,
    ) -> Result<Vec<PaymentMethod>, BackendError> {
        self.modify(|doc| {
            let before = doc.payment_methods.len();
            doc.payment_methods.retain(|m| m.id != method_id);
            let changed = doc.payment_methods.len() != before;
            if !changed {
                warn!(method_id = %method_id, "Payment method to delete not found");
            }
            (doc.payment_methods.clone(), changed)
        })
        .await
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Exact email and password match
    pub async fn sign_in_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, BackendError> {
        self.read(|doc| {
            doc.users
                .iter()
                .find(|u| u.email == email && u.password == password)
                .cloned()
        })
        .await
    }

    pub async fn sign_up_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, BackendError> {
        let user = self
            .modify(|doc| {
                if doc.users.iter().any(|u| u.email == email) {
                    return (None, false);
                }
                let user = UserProfile {
                    id: generate_user_id(),
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                    role: Role::User,
                    subscription_status: SubscriptionStatus::None,
                    premium_since: None,
                    premium_renewal_date: None,
                };
                doc.users.push(user.clone());
                doc.user_data.insert(user.id.clone(), UserDataBag::default());
                (Some(user), true)
            })
            .await?;

        match user {
            Some(user) => {
                info!(user_id = %user.id, email = %safe_email_log(email), "User signed up");
                Ok(user)
            }
            None => {
                warn!(email = %safe_email_log(email), "Sign-up rejected: email already registered");
                Err(BackendError::EmailExists)
            }
        }
    }

    /// All users after demoting lapsed subscriptions
    pub async fn get_all_users(&self) -> Result<Vec<UserProfile>, BackendError> {
        self.modify(|doc| {
            let changed = doc.expire_subscriptions();
            (doc.users.clone(), changed)
        })
        .await
    }

    pub async fn update_user_subscription(
        &self,
        user_id: &str,
        status: SubscriptionStatus,
    ) -> Result<Vec<UserProfile>, BackendError> {
        self.modify(|doc| match doc.set_subscription(user_id, status) {
            Ok(()) => (Ok(doc.users.clone()), true),
            Err(e) => (Err(e), false),
        })
        .await?
    }

    // ========================================================================
    // User data
    // ========================================================================

    /// The user's bag, created empty when missing
    pub async fn load_user_data(&self, user_id: &str) -> Result<UserDataBag, BackendError> {
        self.modify(|doc| {
            let created = !doc.user_data.contains_key(user_id);
            let bag = doc.user_data.entry(user_id.to_string()).or_default().clone();
            (bag, created)
        })
        .await
    }

    pub async fn update_user_data(
        &self,
        user_id: &str,
        update: UserDataUpdate,
    ) -> Result<(), BackendError> {
        let key = update.key();
        self.modify(|doc| {
            update.apply(doc.user_data.entry(user_id.to_string()).or_default());
            ((), true)
        })
        .await?;
        debug!(user_id = %user_id, key = %key, "User data persisted");
        Ok(())
    }

    // ========================================================================
    // Payments
    // ========================================================================

    pub async fn get_pending_payments(&self) -> Result<Vec<PendingPayment>, BackendError> {
        self.read(|doc| doc.pending_payments.clone()).await
    }

    /// Queues the payment and marks its user pending
    pub async fn submit_for_premium(
        &self,
        payment: PendingPayment,
    ) -> Result<PaymentOutcome, BackendError> {
        let payment_id = payment.id.clone();
        let user_id = payment.user_id.clone();
        let outcome = self
            .modify(|doc| {
                if let Some(user) = doc.user_mut(&payment.user_id) {
                    user.subscription_status = SubscriptionStatus::Pending;
                }
                doc.pending_payments.push(payment);
                (doc.payment_outcome(), true)
            })
            .await?;

        info!(payment_id = %payment_id, user_id = %user_id, "Premium payment submitted");
        Ok(outcome)
    }

    pub async fn approve_payment(&self, payment_id: &str) -> Result<PaymentOutcome, BackendError> {
        self.resolve_payment(payment_id, SubscriptionStatus::Active)
            .await
    }

    pub async fn reject_payment(&self, payment_id: &str) -> Result<PaymentOutcome, BackendError> {
        self.resolve_payment(payment_id, SubscriptionStatus::None)
            .await
    }

    /// Removes the payment and sets its user's status in one write.
    /// The payment is removed even when its user no longer exists.
    async fn resolve_payment(
        &self,
        payment_id: &str,
        status: SubscriptionStatus,
    ) -> Result<PaymentOutcome, BackendError> {
        let result = self
            .modify(|doc| {
                let position = match doc.pending_payments.iter().position(|p| p.id == payment_id)
                {
                    Some(position) => position,
                    None => return (Err(BackendError::PaymentNotFound(payment_id.to_string())), false),
                };
                let payment = doc.pending_payments.remove(position);
                match doc.set_subscription(&payment.user_id, status) {
                    Ok(()) => (Ok((payment.user_id, doc.payment_outcome())), true),
                    Err(e) => (Err(e), true),
                }
            })
            .await?;

        match result {
            Ok((user_id, outcome)) => {
                info!(
                    payment_id = %payment_id,
                    user_id = %user_id,
                    status = ?status,
                    "Payment resolved"
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!(payment_id = %payment_id, error = %e, "Payment could not be resolved");
                Err(e)
            }
        }
    }

    #[cfg(test)]
    pub(crate) async fn document(&self) -> AppDocument {
        self.read_document().await.expect("read document")
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::models::{Role, SubscriptionStatus, UserProfile};
    use crate::common::config::{SeedAdmin, SeedPaymentMethod};
    use crate::i18n::Language;
    use crate::kitchen::models::{
        NewPantryItem, NewShoppingListItem, PantryItemPatch, ShoppingListItemPatch, HISTORY_LIMIT,
    };
    use crate::recipes::models::{Recipe, RecipeImage, TranslatedContent};
    use crate::services::ai_gateway::{parse_recipes, testing::TWO_RECIPES};
    use crate::services::local_storage::{memory_pool, session_language_key, session_user_key};
    use crate::services::mock_backend::BackendError;
    use crate::services::{LocalStorage, MockBackend};
    use crate::subscriptions::models::{PendingPayment, SubmitPaymentRequest};
    use chrono::{Duration as ChronoDuration, Utc};
    use std::sync::Arc;
    use std::time::Duration;

    struct Harness {
        backend: Arc<MockBackend>,
        storage: LocalStorage,
    }

    impl Harness {
        async fn new() -> Self {
            let storage = LocalStorage::new(memory_pool().await);
            let backend = Arc::new(MockBackend::new(storage.clone(), Duration::ZERO));
            backend
                .seed(
                    &[SeedAdmin {
                        name: "Admin".to_string(),
                        email: "admin@example.com".to_string(),
                        password: "admin".to_string(),
                    }],
                    &[SeedPaymentMethod {
                        name: "Bkash".to_string(),
                        details: "0170".to_string(),
                    }],
                )
                .await
                .unwrap();
            Self { backend, storage }
        }

        fn store(&self, session_id: &str) -> AppStore {
            AppStore::new(session_id, self.backend.clone(), self.storage.clone())
        }

        async fn signed_up(&self, session_id: &str, email: &str) -> AppStore {
            let store = self.store(session_id);
            store.sign_up("Ann", email, "pw").await.unwrap();
            store
        }
    }

    fn milk() -> NewShoppingListItem {
        NewShoppingListItem {
            name: "Milk".to_string(),
            quantity: "1 l".to_string(),
            category: Some("Dairy".to_string()),
        }
    }

    fn bread() -> NewShoppingListItem {
        NewShoppingListItem {
            name: "Bread".to_string(),
            quantity: "1".to_string(),
            category: None,
        }
    }

    fn recipe() -> Recipe {
        parse_recipes(TWO_RECIPES).unwrap().remove(0)
    }

    #[tokio::test]
    async fn test_mutators_without_user_are_noops() {
        let h = Harness::new().await;
        let store = h.store("s1");
        assert!(store.add_to_shopping_list(vec![milk()]).await.is_none());
        assert!(store.add_to_history("eggs", 2).await.is_none());
        assert!(store.snapshot().await.shopping_list.is_empty());
    }

    #[tokio::test]
    async fn test_shopping_list_persists_in_order() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;
        let user_id = store.user().await.unwrap().id;

        let list = store.add_to_shopping_list(vec![milk(), bread()]).await.unwrap();
        let milk_id = list[0].id.clone();
        let bread_id = list[1].id.clone();
        store
            .update_shopping_list_item(
                &milk_id,
                &ShoppingListItemPatch {
                    checked: Some(true),
                    ..Default::default()
                },
            )
            .await;
        store.remove_shopping_list_item(&bread_id).await;
        store.add_to_shopping_list(vec![bread()]).await;
        store.flush().await;

        let in_memory = store.snapshot().await.shopping_list;
        let persisted = h.backend.load_user_data(&user_id).await.unwrap().shopping_list;
        assert_eq!(in_memory, persisted);
        assert_eq!(persisted.len(), 2);
        assert!(persisted[0].checked);
        assert_eq!(persisted[0].category, "Dairy");
        assert_eq!(persisted[1].category, "");
    }

    #[tokio::test]
    async fn test_toggle_all_shopping_items() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;

        let empty = store.toggle_all_shopping_list_items().await.unwrap();
        assert!(empty.is_empty());

        let list = store.add_to_shopping_list(vec![milk(), bread()]).await.unwrap();
        store
            .update_shopping_list_item(
                &list[0].id,
                &ShoppingListItemPatch {
                    checked: Some(true),
                    ..Default::default()
                },
            )
            .await;

        let toggled = store.toggle_all_shopping_list_items().await.unwrap();
        assert!(toggled.iter().all(|i| i.checked));

        let toggled = store.toggle_all_shopping_list_items().await.unwrap();
        assert!(toggled.iter().all(|i| !i.checked));
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_capped() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;

        for i in 0..(HISTORY_LIMIT + 5) {
            store.add_to_history(&format!("query {}", i), i).await;
        }
        let history = store.snapshot().await.history;
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].query, format!("query {}", HISTORY_LIMIT + 4));
    }

    #[tokio::test]
    async fn test_pantry_add_update_remove() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;
        let user_id = store.user().await.unwrap().id;

        let pantry = store
            .add_to_pantry(NewPantryItem {
                name: "Eggs".to_string(),
                quantity: "6".to_string(),
                expiry_date: "2030-01-01".to_string(),
                notes: None,
            })
            .await
            .unwrap();
        let id = pantry[0].id.clone();

        let pantry = store
            .update_pantry_item(
                &id,
                &PantryItemPatch {
                    quantity: Some("4".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(pantry[0].quantity, "4");
        assert_eq!(pantry[0].name, "Eggs");

        store.remove_pantry_item(&id).await;
        store.flush().await;
        assert!(h.backend.load_user_data(&user_id).await.unwrap().pantry.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_save_recipe_flips_generated_flag() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;
        let recipe = recipe();
        store.set_generated_recipes(vec![recipe.clone()]).await;

        assert_eq!(store.toggle_save_recipe(&recipe).await, Some(true));
        let state = store.snapshot().await;
        assert!(state.saved_recipes[0].is_saved);
        assert!(state.generated_recipes[0].is_saved);

        assert_eq!(store.toggle_save_recipe(&recipe).await, Some(false));
        let state = store.snapshot().await;
        assert!(state.saved_recipes.is_empty());
        assert!(!state.generated_recipes[0].is_saved);
    }

    #[tokio::test]
    async fn test_set_recipe_image_by_id() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;
        let recipes = parse_recipes(TWO_RECIPES).unwrap();
        store.set_generated_recipes(recipes.clone()).await;

        // completion order does not matter
        assert!(store.set_recipe_image(&recipes[1].id, RecipeImage::Failed).await);
        assert!(
            store
                .set_recipe_image(&recipes[0].id, RecipeImage::Ready("data:x".to_string()))
                .await
        );
        assert!(!store.set_recipe_image("R_NOPE", RecipeImage::Failed).await);

        let generated = store.generated_recipes().await;
        assert_eq!(generated[0].image, RecipeImage::Ready("data:x".to_string()));
        assert_eq!(generated[1].image, RecipeImage::Failed);
    }

    #[tokio::test]
    async fn test_apply_translation_keeps_id() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;
        let recipe = recipe();
        store.set_generated_recipes(vec![recipe.clone()]).await;

        let translated = TranslatedContent {
            title: "Pasta al pomodoro".to_string(),
            description: "Veloce.".to_string(),
            ingredients: vec!["pasta".to_string()],
            instructions: vec!["Cuocere".to_string()],
        };
        let updated = store.apply_translation(&recipe.id, &translated).await.unwrap();
        assert_eq!(updated.id, recipe.id);
        assert_eq!(updated.title, "Pasta al pomodoro");
        assert_eq!(updated.english_title, recipe.english_title);
    }

    #[tokio::test]
    async fn test_sign_out_clears_user_state() {
        let h = Harness::new().await;
        let store = h.signed_up("s1", "ann@example.com").await;
        store.add_to_shopping_list(vec![milk()]).await;
        store.add_to_history("milk", 1).await;
        store.set_generated_recipes(vec![recipe()]).await;
        store.timer.start("R_1", "Soup", 60).await;

        store.sign_out().await;

        let state = store.snapshot().await;
        assert!(state.current_user_id.is_none());
        assert!(state.pantry.is_empty());
        assert!(state.shopping_list.is_empty());
        assert!(state.history.is_empty());
        assert!(state.saved_recipes.is_empty());
        assert!(state.generated_recipes.is_empty());
        assert!(state.pending_payments.is_empty());
        assert!(!store.timer.snapshot().await.is_active);
        assert_eq!(h.storage.get_item(&session_user_key("s1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_in_with_bad_credentials() {
        let h = Harness::new().await;
        h.signed_up("s1", "ann@example.com").await;
        let store = h.store("s2");
        let err = store.sign_in("ann@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
        assert!(store.user().await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_sign_up() {
        let h = Harness::new().await;
        h.signed_up("s1", "ann@example.com").await;
        let err = h
            .store("s2")
            .sign_up("Ann", "ann@example.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Backend(BackendError::EmailExists)));
    }


    #[tokio::test]
    async fn test_bootstrap_restores_session() {
        let h = Harness::new().await;
        let first = h.signed_up("s1", "ann@example.com").await;
        first.add_to_shopping_list(vec![milk()]).await;
        first.set_language(Language::Ja).await;
        first.flush().await;

        let restored = h.store("s1");
        assert!(restored.snapshot().await.is_initial_loading);
        assert!(restored.bootstrap().await.unwrap());

        let state = restored.snapshot().await;
        assert!(!state.is_initial_loading);
        assert_eq!(state.shopping_list.len(), 1);
        assert_eq!(state.language, Language::Ja);
        assert_eq!(restored.user().await.map(|u| u.email).as_deref(), Some("ann@example.com"));
    }

    #[tokio::test]
    async fn test_bootstrap_drops_stale_session() {
        let h = Harness::new().await;
        h.storage
            .set_item(&session_user_key("s9"), "U_DELETED")
            .await
            .unwrap();

        let store = h.store("s9");
        assert!(!store.bootstrap().await.unwrap());
        assert!(store.user().await.is_none());
        assert_eq!(h.storage.get_item(&session_user_key("s9")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_premium_submission_and_approval() {
        let h = Harness::new().await;
        let user_store = h.signed_up("s1", "ann@example.com").await;

        let payment = user_store
            .submit_for_premium(SubmitPaymentRequest {
                payment_method: "Bkash".to_string(),
                transaction_id: "TX123".to_string(),
                sender_number: None,
            })
            .await
            .unwrap();
        assert_eq!(
            user_store.user().await.unwrap().subscription_status,
            SubscriptionStatus::Pending
        );

        let admin_store = h.store("s2");
        let admin = admin_store.sign_in("admin@example.com", "admin").await.unwrap();
        assert_eq!(admin.role, Role::Admin);
        let pending = admin_store.snapshot().await.pending_payments;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, payment.id);
        assert_eq!(pending[0].transaction_id, "TX123");

        admin_store.approve_payment(&payment.id).await.unwrap();
        assert!(admin_store.snapshot().await.pending_payments.is_empty());

        // the user's store sees the change after a refresh
        user_store.refresh_users().await.unwrap();
        let user = user_store.user().await.unwrap();
        assert_eq!(user.subscription_status, SubscriptionStatus::Active);
        let expected = Utc::now() + ChronoDuration::days(30);
        assert!((user.premium_renewal_date.unwrap() - expected).num_seconds().abs() < 5);
    }

    #[tokio::test]
    async fn test_admin_rejection_and_status_override() {
        let h = Harness::new().await;
        let user_store = h.signed_up("s1", "ann@example.com").await;
        let user_id = user_store.user().await.unwrap().id;
        let payment = user_store
            .submit_for_premium(SubmitPaymentRequest {
                payment_method: "Nagad".to_string(),
                transaction_id: "TX7".to_string(),
                sender_number: Some("0180".to_string()),
            })
            .await
            .unwrap();

        let admin_store = h.store("s2");
        admin_store.sign_in("admin@example.com", "admin").await.unwrap();
        admin_store.reject_payment(&payment.id).await.unwrap();

        let users = admin_store
            .update_user_subscription_status_by_admin(&user_id, SubscriptionStatus::Active)
            .await
            .unwrap();
        let user = users.iter().find(|u| u.id == user_id).unwrap();
        assert!(user.is_premium());
        assert!(user.premium_since.is_some());

        let users = admin_store
            .update_user_subscription_status_by_admin(&user_id, SubscriptionStatus::None)
            .await
            .unwrap();
        let user = users.iter().find(|u| u.id == user_id).unwrap();
        assert!(user.premium_since.is_none());
        assert!(user.premium_renewal_date.is_none());
    }

    #[tokio::test]
    async fn test_registry_restores_once() {
        let h = Harness::new().await;
        h.signed_up("s1", "ann@example.com").await;

        let registry = SessionRegistry::new(Duration::from_secs(60));
        let a = registry.get_or_restore("s1", &h.backend, &h.storage).await.unwrap();
        let b = registry.get_or_restore("s1", &h.backend, &h.storage).await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.user().await.is_some());
        assert_eq!(registry.len().await, 1);

        registry.remove("s1").await;
        assert!(registry.get("s1").await.is_none());
    }

    #[tokio::test]
    async fn test_decision_on_deleted_user_reloads_queue() {
        let h = Harness::new().await;
        let ghost = UserProfile {
            id: "U_GHOST".to_string(),
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
            password: String::new(),
            role: Role::User,
            subscription_status: SubscriptionStatus::None,
            premium_since: None,
            premium_renewal_date: None,
        };
        let payment = PendingPayment::new(
            &ghost,
            SubmitPaymentRequest {
                payment_method: "Bkash".to_string(),
                transaction_id: "TX1".to_string(),
                sender_number: None,
            },
            Utc::now(),
        );
        let payment_id = payment.id.clone();
        h.backend.submit_for_premium(payment).await.unwrap();

        let admin_store = h.store("s2");
        admin_store.sign_in("admin@example.com", "admin").await.unwrap();
        assert_eq!(admin_store.snapshot().await.pending_payments.len(), 1);

        let err = admin_store.approve_payment(&payment_id).await.unwrap_err();
        assert!(matches!(err, StoreError::Backend(BackendError::UserNotFound(_))));
        assert!(admin_store.snapshot().await.pending_payments.is_empty());
        assert_eq!(admin_store.session_snapshot().await.pending_payments, 0);
    }

    #[tokio::test]
    async fn test_registry_evicts_idle_sessions() {
        let h = Harness::new().await;
        let registry = SessionRegistry::new(Duration::from_secs(60));
        let idle = Arc::new(h.signed_up("s1", "ann@example.com").await);
        idle.set_language(Language::Fr).await;
        registry.insert(idle).await;
        let active = Arc::new(h.signed_up("s2", "bob@example.com").await);
        registry.insert(active).await;

        tokio::time::pause();
        tokio::time::advance(Duration::from_secs(40)).await;
        assert!(registry.get("s2").await.is_some());
        tokio::time::advance(Duration::from_secs(40)).await;
        tokio::time::resume();

        assert_eq!(registry.evict_expired().await, 1);
        assert!(registry.get("s1").await.is_none());
        assert!(registry.get("s2").await.is_some());
        assert_eq!(h.storage.get_item(&session_user_key("s1")).await.unwrap(), None);
        assert_eq!(h.storage.get_item(&session_language_key("s1")).await.unwrap(), None);
        assert!(h.storage.get_item(&session_user_key("s2")).await.unwrap().is_some());

        // the evicted session cannot come back signed in
        let restored = registry.get_or_restore("s1", &h.backend, &h.storage).await.unwrap();
        assert!(restored.user().await.is_none());
    }
}

// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::common::config::AppConfig;
use crate::services::{AiGateway, LocalStorage, MockBackend};
use crate::store::SessionRegistry;

/// Application state containing the storage pool, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub local_storage: LocalStorage,
    pub backend: Arc<MockBackend>,
    pub ai_gateway: Arc<AiGateway>,
    pub sessions: SessionRegistry,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::auth::AuthedSession;
    use crate::common::config::{SeedAdmin, SeedPaymentMethod};
    use crate::common::generate_session_id;
    use crate::services::ai_gateway::testing::{gateway, FakeAiClient};
    use crate::services::gemini::GeminiConfig;
    use crate::services::local_storage::memory_pool;
    use crate::store::AppStore;
    use std::time::Duration;
    use tokio::sync::RwLock;

    pub const ADMIN_EMAIL: &str = "admin@example.com";
    pub const ADMIN_PASSWORD: &str = "admin";

    pub fn test_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            jwt_secret: "test_secret_key".to_string(),
            session_ttl_hours: 1,
            cors_origins: Vec::new(),
            backend_latency: Duration::ZERO,
            gemini: GeminiConfig::default(),
            seed_admins: vec![SeedAdmin {
                name: "Admin".to_string(),
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            }],
            seed_payment_methods: vec![SeedPaymentMethod {
                name: "Bkash".to_string(),
                details: "01700000000".to_string(),
            }],
        }
    }

    /// Seeded in-memory state with a zero-latency backend and a fake AI client
    pub async fn test_state(client: FakeAiClient) -> Arc<RwLock<AppState>> {
        let config = test_config();
        let db = memory_pool().await;
        let local_storage = LocalStorage::new(db.clone());
        let backend = Arc::new(MockBackend::new(local_storage.clone(), Duration::ZERO));
        backend
            .seed(&config.seed_admins, &config.seed_payment_methods)
            .await
            .unwrap();

        let sessions = SessionRegistry::new(config.session_ttl());
        Arc::new(RwLock::new(AppState {
            db,
            config: Arc::new(config),
            local_storage,
            backend,
            ai_gateway: gateway(client),
            sessions,
        }))
    }

    async fn open(state: &Arc<RwLock<AppState>>) -> (AppState, Arc<AppStore>) {
        let state = state.read().await.clone();
        let store = Arc::new(AppStore::new(
            &generate_session_id(),
            state.backend.clone(),
            state.local_storage.clone(),
        ));
        (state, store)
    }

    /// A registered session for a freshly signed-up user
    pub async fn user_session(state: &Arc<RwLock<AppState>>, email: &str) -> AuthedSession {
        let (state, store) = open(state).await;
        store.sign_up("Ann", email, "pw").await.unwrap();
        let store = state.sessions.insert(store).await;
        AuthedSession {
            session_id: store.session_id().to_string(),
            store,
        }
    }

    pub async fn admin_session(state: &Arc<RwLock<AppState>>) -> AuthedSession {
        let (state, store) = open(state).await;
        store.sign_in(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
        let store = state.sessions.insert(store).await;
        AuthedSession {
            session_id: store.session_id().to_string(),
            store,
        }
    }

    /// A registered session with nobody signed in
    pub async fn anonymous_session(state: &Arc<RwLock<AppState>>) -> AuthedSession {
        let (state, store) = open(state).await;
        store.bootstrap().await.unwrap();
        let store = state.sessions.insert(store).await;
        AuthedSession {
            session_id: store.session_id().to_string(),
            store,
        }
    }
}

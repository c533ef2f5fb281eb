//! Live stores keyed by session id

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{info, warn};

use super::{AppStore, StoreError};
use crate::services::{LocalStorage, MockBackend};

/// How often the cleanup task looks for idle sessions
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug)]
struct SessionEntry {
    store: Arc<AppStore>,
    last_seen: Instant,
}

/// Sessions idle for longer than `idle_ttl` are evicted. Tokens live for the
/// same period from issue, so an evicted session never has a valid token.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// The live store for `session_id`; marks the session as seen
    pub async fn get(&self, session_id: &str) -> Option<Arc<AppStore>> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(session_id)?;
        entry.last_seen = Instant::now();
        Some(Arc::clone(&entry.store))
    }

    /// Registers `store`, keeping an entry that raced in first
    pub async fn insert(&self, store: Arc<AppStore>) -> Arc<AppStore> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .entry(store.session_id().to_string())
            .or_insert_with(|| SessionEntry {
                store,
                last_seen: Instant::now(),
            });
        entry.last_seen = Instant::now();
        Arc::clone(&entry.store)
    }

    pub async fn remove(&self, session_id: &str) -> Option<Arc<AppStore>> {
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|entry| entry.store)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Waits for every live session's queued writes to land
    pub async fn flush_all(&self) {
        let stores: Vec<Arc<AppStore>> = self
            .sessions
            .read()
            .await
            .values()
            .map(|entry| Arc::clone(&entry.store))
            .collect();
        for store in stores {
            store.flush().await;
        }
    }

    /// Drops sessions idle for longer than the TTL along with their
    /// persisted session keys. Returns how many were evicted.
    pub async fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let expired: Vec<Arc<AppStore>> = {
            let mut sessions = self.sessions.write().await;
            let ids: Vec<String> = sessions
                .iter()
                .filter(|(_, entry)| now.duration_since(entry.last_seen) > self.idle_ttl)
                .map(|(id, _)| id.clone())
                .collect();
            ids.iter()
                .filter_map(|id| sessions.remove(id))
                .map(|entry| entry.store)
                .collect()
        };

        for store in &expired {
            warn!(session_id = %store.session_id(), "Evicting idle session");
            store.expire().await;
        }
        expired.len()
    }

    pub fn start_cleanup_task(registry: SessionRegistry, period: Duration) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                registry.evict_expired().await;
            }
        });
    }

    /// The live store for `session_id`, rebuilding it from persisted
    /// session keys when this process has not seen the session yet
    pub async fn get_or_restore(
        &self,
        session_id: &str,
        backend: &Arc<MockBackend>,
        storage: &LocalStorage,
    ) -> Result<Arc<AppStore>, StoreError> {
        if let Some(store) = self.get(session_id).await {
            return Ok(store);
        }

        let store = Arc::new(AppStore::new(session_id, Arc::clone(backend), storage.clone()));
        let restored = store.bootstrap().await?;
        info!(session_id = %session_id, restored = restored, "Session restored from storage");
        Ok(self.insert(store).await)
    }
}

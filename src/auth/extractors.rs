//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::models::{Claims, UserProfile};
use crate::common::{ApiError, AppState};
use crate::store::AppStore;

/// Session resolved from the bearer token
///
/// The token's `sub` is the session id. A session this process has not
/// seen yet is rebuilt from local storage before the handler runs.
#[derive(Clone)]
pub struct AuthedSession {
    pub session_id: String,
    pub store: Arc<AppStore>,
}

impl AuthedSession {
    /// The signed-in user, or 401 when the session has none
    pub async fn require_user(&self) -> Result<UserProfile, ApiError> {
        self.store.user().await.ok_or_else(|| {
            debug!(session_id = %self.session_id, "Session has no signed-in user");
            ApiError::Unauthorized("not signed in".to_string())
        })
    }

    /// The signed-in user when they are an admin, otherwise 403
    pub async fn require_admin(&self) -> Result<UserProfile, ApiError> {
        let user = self.require_user().await?;
        if !user.is_admin() {
            warn!(user_id = %user.id, "Admin access denied");
            return Err(ApiError::Forbidden("admin access required".to_string()));
        }
        Ok(user)
    }

    /// Maps the `None` a store mutator returns without a user to 401
    pub fn signed_in<T>(&self, value: Option<T>) -> Result<T, ApiError> {
        value.ok_or_else(|| ApiError::Unauthorized("not signed in".to_string()))
    }
}

/// Decodes a token, accepting both `Bearer <token>` and the raw token
pub fn decode_session_token(header: &str, secret: &str) -> Result<Claims, ApiError> {
    let bare_token = header.strip_prefix("Bearer ").unwrap_or(header).trim();

    decode::<Claims>(
        bare_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        warn!(error = %e, "JWT token validation failed");
        ApiError::Unauthorized("invalid token".into())
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let header = match parts.headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
            Some(h) => h,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        let claims = decode_session_token(header, &app_state.config.jwt_secret)?;
        let store = app_state
            .sessions
            .get_or_restore(&claims.sub, &app_state.backend, &app_state.local_storage)
            .await?;

        debug!(session_id = %claims.sub, "Session resolved via extractor");
        Ok(AuthedSession {
            session_id: claims.sub,
            store,
        })
    }
}

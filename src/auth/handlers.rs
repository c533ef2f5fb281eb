//! Authentication and session handlers

use axum::extract::{Extension, Json};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::extractors::AuthedSession;
use super::models::{
    AuthResponse, Claims, LanguageRequest, PublicUser, SignInRequest, SignUpRequest,
};
use super::validators::{SignInValidator, SignUpValidator};
use crate::common::config::AppConfig;
use crate::common::{generate_session_id, safe_email_log, ApiError, AppState, Notice, Validator};
use crate::i18n::{t, Language};
use crate::services::BackendError;
use crate::store::{AppStore, SessionSnapshot, StoreError};

/// Issues a session token whose `sub` is the session id
pub fn create_session_token(config: &AppConfig, session_id: &str) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::hours(config.session_ttl_hours)).timestamp() as usize;
    let claims = Claims {
        sub: session_id.to_string(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        error!(error = %e, session_id = %session_id, "JWT encoding error");
        ApiError::InternalServer("jwt error".to_string())
    })
}

/// Registers the fresh store and hands out its token
async fn open_session(
    state: &AppState,
    store: Arc<AppStore>,
    notice: Notice,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = store
        .user()
        .await
        .ok_or_else(|| ApiError::InternalServer("session has no user".to_string()))?;
    let token = create_session_token(&state.config, store.session_id())?;
    state.sessions.insert(store).await;

    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(&user),
        notice,
    }))
}

/// POST /api/auth/signup
///
/// # Request Body
/// ```json
/// { "name": "Ann", "email": "ann@example.com", "password": "secret" }
/// ```
///
/// # Response
/// ```json
/// { "token": "<jwt>", "user": { ... }, "notice": { "level": "success", ... } }
/// ```
pub async fn signup(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<SignUpRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    SignUpValidator.validate(&payload).into_result()?;
    let state = state_lock.read().await.clone();

    let store = Arc::new(AppStore::new(
        &generate_session_id(),
        state.backend.clone(),
        state.local_storage.clone(),
    ));

    match store
        .sign_up(payload.name.trim(), payload.email.trim(), &payload.password)
        .await
    {
        Ok(_) => {}
        Err(StoreError::Backend(BackendError::EmailExists)) => {
            return Err(ApiError::Conflict(t(Language::default(), "error_email_exists")));
        }
        Err(e) => return Err(e.into()),
    }

    info!(
        session_id = %store.session_id(),
        email = %safe_email_log(&payload.email),
        "Account created"
    );
    open_session(&state, store, Notice::success("Account created successfully!")).await
}

/// POST /api/auth/signin
pub async fn signin(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    SignInValidator.validate(&payload).into_result()?;
    let state = state_lock.read().await.clone();

    let store = Arc::new(AppStore::new(
        &generate_session_id(),
        state.backend.clone(),
        state.local_storage.clone(),
    ));
    store
        .sign_in(payload.email.trim(), &payload.password)
        .await?;

    open_session(&state, store, Notice::success("Login successful!")).await
}

/// POST /api/auth/signout
///
/// Clears the session's user state and forgets the session
pub async fn signout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
) -> Result<Json<serde_json::Value>, ApiError> {
    session.store.sign_out().await;
    state_lock
        .read()
        .await
        .sessions
        .remove(&session.session_id)
        .await;

    Ok(Json(serde_json::json!({
        "message": "Logout successful"
    })))
}

/// GET /api/me
///
/// Reloads the user list first so admin decisions made in other sessions
/// show up here.
#[axum::debug_handler]
pub async fn me(session: AuthedSession) -> Result<Json<serde_json::Value>, ApiError> {
    session.require_user().await?;
    session.store.refresh_users().await?;
    let user = session.require_user().await?;
    Ok(Json(serde_json::json!({
        "user": PublicUser::from(&user),
        "is_admin": user.is_admin(),
        "is_premium": user.is_premium(),
    })))
}

/// GET /api/session
pub async fn session_overview(session: AuthedSession) -> Json<SessionSnapshot> {
    Json(session.store.session_snapshot().await)
}

/// PUT /api/session/language
pub async fn set_language(
    session: AuthedSession,
    Json(payload): Json<LanguageRequest>,
) -> Json<SessionSnapshot> {
    session.store.set_language(payload.language).await;
    info!(session_id = %session.session_id, language = %payload.language, "Language changed");
    Json(session.store.session_snapshot().await)
}

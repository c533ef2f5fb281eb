// src/cooking/handlers.rs

use axum::extract::Json;
use tracing::info;

use super::models::{StartTimerRequest, TimerResponse};
use super::validators::StartTimerValidator;
use crate::auth::AuthedSession;
use crate::common::{ApiError, Notice, Validator};
use crate::i18n::t;

/// Wraps the timer with a notice when a countdown finished since the last poll
async fn timer_response(session: &AuthedSession) -> Json<TimerResponse> {
    let timer = session.store.timer.snapshot().await;
    let notice = match session.store.timer.take_finished().await {
        Some(_) => Some(Notice::info(t(session.store.language().await, "timer_finished"))),
        None => None,
    };
    Json(TimerResponse { timer, notice })
}

/// GET /api/timer
pub async fn get_timer(session: AuthedSession) -> Result<Json<TimerResponse>, ApiError> {
    session.require_user().await?;
    Ok(timer_response(&session).await)
}

/// POST /api/timer/start
///
/// # Request Body
/// ```json
/// { "recipeId": "R_...", "recipeTitle": "Tomato Pasta", "seconds": 600 }
/// ```
///
/// The title is looked up from the recipe when omitted.
pub async fn start_timer(
    session: AuthedSession,
    Json(payload): Json<StartTimerRequest>,
) -> Result<Json<TimerResponse>, ApiError> {
    StartTimerValidator.validate(&payload).into_result()?;
    let user = session.require_user().await?;

    let recipe_id = payload.recipe_id.unwrap_or_default();
    let recipe_title = match payload.recipe_title.filter(|t| !t.trim().is_empty()) {
        Some(title) => title,
        None => session
            .store
            .find_recipe(&recipe_id)
            .await
            .map(|r| r.title)
            .unwrap_or_default(),
    };

    let seconds = u32::try_from(payload.seconds)
        .map_err(|_| ApiError::ValidationError("seconds: out of range".to_string()))?;
    session
        .store
        .timer
        .start(&recipe_id, &recipe_title, seconds)
        .await;
    info!(user_id = %user.id, recipe_id = %recipe_id, seconds = seconds, "Cooking timer started");

    Ok(timer_response(&session).await)
}

/// POST /api/timer/pause
///
/// Toggles pause; calling it again resumes.
pub async fn toggle_pause(session: AuthedSession) -> Result<Json<TimerResponse>, ApiError> {
    session.require_user().await?;
    session.store.timer.toggle_pause().await;
    Ok(timer_response(&session).await)
}

/// POST /api/timer/stop
pub async fn stop_timer(session: AuthedSession) -> Result<Json<TimerResponse>, ApiError> {
    session.require_user().await?;
    session.store.timer.stop().await;
    Ok(timer_response(&session).await)
}

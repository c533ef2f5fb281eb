// src/admin/handlers/users.rs

use axum::extract::{Json, Path};
use tracing::info;

use crate::admin::models::{public_users, UpdateSubscriptionRequest};
use crate::auth::models::PublicUser;
use crate::auth::AuthedSession;
use crate::common::ApiError;

/// GET /api/admin/users - All accounts, with lapsed subscriptions expired
pub async fn list_users(session: AuthedSession) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let admin = session.require_admin().await?;
    let users = session.store.refresh_users().await?;

    info!(admin_user_id = %admin.id, user_count = users.len(), "User list fetched");
    Ok(Json(public_users(&users)))
}

/// PUT /api/admin/users/:id/subscription
///
/// # Request Body
/// ```json
/// { "status": "active" }
/// ```
pub async fn update_user_subscription(
    session: AuthedSession,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateSubscriptionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let admin = session.require_admin().await?;
    let users = session
        .store
        .update_user_subscription_status_by_admin(&user_id, payload.status)
        .await?;

    info!(
        admin_user_id = %admin.id,
        target_user_id = %user_id,
        status = ?payload.status,
        "User subscription updated"
    );

    let user = users
        .iter()
        .find(|u| u.id == user_id)
        .map(PublicUser::from)
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", user_id)))?;

    Ok(Json(serde_json::json!({
        "message": "User subscription updated.",
        "user": user,
    })))
}

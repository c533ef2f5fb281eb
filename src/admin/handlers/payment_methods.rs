// src/admin/handlers/payment_methods.rs

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::auth::AuthedSession;
use crate::common::{ApiError, AppState, Validator};
use crate::subscriptions::models::{CreatePaymentMethodRequest, PaymentMethod};
use crate::subscriptions::validators::PaymentMethodValidator;

/// POST /api/admin/payment-methods
pub async fn add_payment_method(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
    Json(payload): Json<CreatePaymentMethodRequest>,
) -> Result<(StatusCode, Json<Vec<PaymentMethod>>), ApiError> {
    PaymentMethodValidator.validate(&payload).into_result()?;
    let admin = session.require_admin().await?;
    let state = state_lock.read().await.clone();

    let methods = state
        .backend
        .add_payment_method(&payload.name, &payload.details)
        .await?;

    info!(admin_user_id = %admin.id, name = %payload.name.trim(), "Payment method added");
    Ok((StatusCode::CREATED, Json(methods)))
}

/// DELETE /api/admin/payment-methods/:id
///
/// Deleting an unknown id returns the unchanged list.
pub async fn delete_payment_method(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
    Path(method_id): Path<String>,
) -> Result<Json<Vec<PaymentMethod>>, ApiError> {
    let admin = session.require_admin().await?;
    let state = state_lock.read().await.clone();

    let methods = state.backend.delete_payment_method(&method_id).await?;

    info!(admin_user_id = %admin.id, method_id = %method_id, "Payment method deleted");
    Ok(Json(methods))
}

// src/admin/handlers/payments.rs

use axum::extract::{Json, Path};
use tracing::info;

use crate::admin::models::{public_users, PaymentDecisionResponse};
use crate::auth::AuthedSession;
use crate::common::ApiError;
use crate::subscriptions::models::PendingPayment;

async fn decision_response(
    session: &AuthedSession,
    message: &str,
) -> Json<PaymentDecisionResponse> {
    let state = session.store.snapshot().await;
    Json(PaymentDecisionResponse {
        message: message.to_string(),
        pending_payments: state.pending_payments,
        users: public_users(&state.all_users),
    })
}

/// GET /api/admin/payments - Pending payments, oldest first
pub async fn list_pending_payments(
    session: AuthedSession,
) -> Result<Json<Vec<PendingPayment>>, ApiError> {
    let admin = session.require_admin().await?;
    let pending = session.store.refresh_pending_payments().await?;

    info!(
        admin_user_id = %admin.id,
        pending_count = pending.len(),
        "Pending payments fetched"
    );
    Ok(Json(pending))
}

/// POST /api/admin/payments/:id/approve
///
/// Removes the payment and activates the user's subscription for 30 days.
pub async fn approve_payment(
    session: AuthedSession,
    Path(payment_id): Path<String>,
) -> Result<Json<PaymentDecisionResponse>, ApiError> {
    let admin = session.require_admin().await?;
    session.store.approve_payment(&payment_id).await?;

    info!(admin_user_id = %admin.id, payment_id = %payment_id, "Payment approved");
    Ok(decision_response(&session, "Subscription approved!").await)
}

/// POST /api/admin/payments/:id/reject
pub async fn reject_payment(
    session: AuthedSession,
    Path(payment_id): Path<String>,
) -> Result<Json<PaymentDecisionResponse>, ApiError> {
    let admin = session.require_admin().await?;
    session.store.reject_payment(&payment_id).await?;

    info!(admin_user_id = %admin.id, payment_id = %payment_id, "Payment rejected");
    Ok(decision_response(&session, "Subscription rejected.").await)
}

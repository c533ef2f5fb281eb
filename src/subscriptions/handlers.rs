// src/subscriptions/handlers.rs

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{PaymentMethod, SubmitPaymentRequest, SubmitPaymentResponse};
use super::validators::SubmitPaymentValidator;
use crate::auth::models::PublicUser;
use crate::auth::AuthedSession;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/payment-methods
pub async fn list_payment_methods(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: AuthedSession,
) -> Result<Json<Vec<PaymentMethod>>, ApiError> {
    session.require_user().await?;
    let state = state_lock.read().await.clone();
    Ok(Json(state.backend.get_payment_methods().await?))
}

/// POST /api/premium/submit
///
/// # Request Body
/// ```json
/// { "paymentMethod": "Bkash", "transactionId": "TX123", "senderNumber": "017..." }
/// ```
///
/// The account moves to `pending` until an admin approves or rejects it.
pub async fn submit_for_premium(
    session: AuthedSession,
    Json(payload): Json<SubmitPaymentRequest>,
) -> Result<(StatusCode, Json<SubmitPaymentResponse>), ApiError> {
    let language = session.store.language().await;
    SubmitPaymentValidator { language }
        .validate(&payload)
        .into_result()?;
    session.require_user().await?;

    let payment = session.store.submit_for_premium(payload).await?;
    let user = session.require_user().await?;

    info!(
        user_id = %user.id,
        payment_id = %payment.id,
        method = %payment.payment_method,
        "Premium payment submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitPaymentResponse {
            payment,
            user: PublicUser::from(&user),
            message: "Payment submitted for review.".to_string(),
        }),
    ))
}

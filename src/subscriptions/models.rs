// src/subscriptions/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::models::{PublicUser, UserProfile};
use crate::common::{generate_payment_id, generate_payment_method_id};

/// An unverified claim of having paid for premium, awaiting admin review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub payment_method: String,
    pub transaction_id: String,
    #[serde(default)]
    pub sender_number: String,
    pub timestamp: DateTime<Utc>,
}

impl PendingPayment {
    pub fn new(user: &UserProfile, request: SubmitPaymentRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_payment_id(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            payment_method: request.payment_method.trim().to_string(),
            transaction_id: request.transaction_id.trim().to_string(),
            sender_number: request.sender_number.unwrap_or_default().trim().to_string(),
            timestamp: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub details: String,
}

impl PaymentMethod {
    pub fn new(name: &str, details: &str) -> Self {
        Self {
            id: generate_payment_method_id(),
            name: name.trim().to_string(),
            details: details.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPaymentRequest {
    pub payment_method: String,
    pub transaction_id: String,
    #[serde(default)]
    pub sender_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePaymentMethodRequest {
    pub name: String,
    pub details: String,
}

/// Users and the pending queue as they stand after a payment operation
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub users: Vec<UserProfile>,
    pub pending_payments: Vec<PendingPayment>,
}

#[derive(Debug, Serialize)]
pub struct SubmitPaymentResponse {
    pub payment: PendingPayment,
    pub user: PublicUser,
    pub message: String,
}

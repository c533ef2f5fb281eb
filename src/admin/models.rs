// src/admin/models.rs

use serde::{Deserialize, Serialize};

use crate::auth::models::{PublicUser, SubscriptionStatus, UserProfile};
use crate::subscriptions::models::PendingPayment;

#[derive(Debug, Deserialize)]
pub struct UpdateSubscriptionRequest {
    pub status: SubscriptionStatus,
}

/// State of the review queue after an approve or reject
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDecisionResponse {
    pub message: String,
    pub pending_payments: Vec<PendingPayment>,
    pub users: Vec<PublicUser>,
}

pub fn public_users(users: &[UserProfile]) -> Vec<PublicUser> {
    users.iter().map(PublicUser::from).collect()
}

//! Account and session data models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Notice;
use crate::i18n::Language;

/// Premium access lasts this many days after an approval
pub const PREMIUM_PERIOD_DAYS: i64 = 30;

/// JWT claims structure. `sub` is the session id, not the user id.
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    None,
    Pending,
    Active,
}

/// User record as stored in the app document.
/// The password is kept as typed; this backend has no real security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
    #[serde(default)]
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub premium_renewal_date: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_premium(&self) -> bool {
        self.subscription_status == SubscriptionStatus::Active
    }

    /// Moves the account to `status`. Activation keeps an earlier
    /// `premium_since` and renews for [`PREMIUM_PERIOD_DAYS`]; every other
    /// status clears both premium dates.
    pub fn apply_subscription_status(&mut self, status: SubscriptionStatus, now: DateTime<Utc>) {
        match status {
            SubscriptionStatus::Active => {
                self.subscription_status = SubscriptionStatus::Active;
                self.premium_since = Some(self.premium_since.unwrap_or(now));
                self.premium_renewal_date = Some(now + Duration::days(PREMIUM_PERIOD_DAYS));
            }
            other => {
                self.subscription_status = other;
                self.premium_since = None;
                self.premium_renewal_date = None;
            }
        }
    }

    /// Drops an active subscription whose renewal date has passed.
    /// Returns true when the record changed.
    pub fn expire_if_lapsed(&mut self, now: DateTime<Utc>) -> bool {
        match (self.subscription_status, self.premium_renewal_date) {
            (SubscriptionStatus::Active, Some(renewal)) if renewal < now => {
                self.apply_subscription_status(SubscriptionStatus::None, now);
                true
            }
            _ => false,
        }
    }
}

/// User as returned over HTTP (no password)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub subscription_status: SubscriptionStatus,
    pub premium_since: Option<DateTime<Utc>>,
    pub premium_renewal_date: Option<DateTime<Utc>>,
}

impl From<&UserProfile> for PublicUser {
    fn from(user: &UserProfile) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            subscription_status: user.subscription_status,
            premium_since: user.premium_since,
            premium_renewal_date: user.premium_renewal_date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
    pub notice: Notice,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: Language,
}

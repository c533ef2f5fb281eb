// src/common/config.rs
//! Runtime configuration loaded from environment variables

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::services::gemini::GeminiConfig;

const DEFAULT_SEED_ADMINS: &str = "Admin:admin@mealmind.local:admin";
const DEFAULT_SEED_PAYMENT_METHODS: &str = "Bkash:01700000000,Nagad:01800000000";

/// Account created on start-up when its email is not yet registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payment method created on start-up when the method list is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPaymentMethod {
    pub name: String,
    pub details: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    pub cors_origins: Vec<String>,
    pub backend_latency: Duration,
    pub gemini: GeminiConfig,
    pub seed_admins: Vec<SeedAdmin>,
    pub seed_payment_methods: Vec<SeedPaymentMethod>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://mealmind.db".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using an insecure development secret");
            "replace_with_strong_secret".to_string()
        });

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(24);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let backend_latency = Duration::from_millis(
            env::var("BACKEND_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(150),
        );

        let seed_admins = parse_seed_admins(
            &env::var("SEED_ADMINS").unwrap_or_else(|_| DEFAULT_SEED_ADMINS.to_string()),
        );
        let seed_payment_methods = parse_seed_payment_methods(
            &env::var("SEED_PAYMENT_METHODS")
                .unwrap_or_else(|_| DEFAULT_SEED_PAYMENT_METHODS.to_string()),
        );

        Self {
            database_url,
            port,
            jwt_secret,
            session_ttl_hours,
            cors_origins,
            backend_latency,
            gemini: GeminiConfig::from_env(),
            seed_admins,
            seed_payment_methods,
        }
    }

    /// Token lifetime, also the idle period after which a session is evicted
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_hours.max(1) as u64 * 3600)
    }
}

/// Parses `name:email:password` entries separated by commas.
/// Malformed entries are skipped with a warning.
pub fn parse_seed_admins(raw: &str) -> Vec<SeedAdmin> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let mut parts = entry.splitn(3, ':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(email), Some(password))
                    if !name.trim().is_empty() && email.contains('@') && !password.is_empty() =>
                {
                    Some(SeedAdmin {
                        name: name.trim().to_string(),
                        email: email.trim().to_string(),
                        password: password.to_string(),
                    })
                }
                _ => {
                    warn!(entry = %entry, "Ignoring malformed SEED_ADMINS entry");
                    None
                }
            }
        })
        .collect()
}

/// Parses `name:details` entries separated by commas.
pub fn parse_seed_payment_methods(raw: &str) -> Vec<SeedPaymentMethod> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.split_once(':') {
            Some((name, details)) if !name.trim().is_empty() => Some(SeedPaymentMethod {
                name: name.trim().to_string(),
                details: details.trim().to_string(),
            }),
            _ => {
                warn!(entry = %entry, "Ignoring malformed SEED_PAYMENT_METHODS entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_admins() {
        let admins = parse_seed_admins("Root:root@example.com:pa:ss, broken ,Ops:ops@example.com:x");
        assert_eq!(admins.len(), 2);
        assert_eq!(admins[0].name, "Root");
        assert_eq!(admins[0].email, "root@example.com");
        // Only the first two separators split, the rest belongs to the password
        assert_eq!(admins[0].password, "pa:ss");
        assert_eq!(admins[1].email, "ops@example.com");
    }

    #[test]
    fn test_parse_seed_admins_rejects_missing_email() {
        assert!(parse_seed_admins("Root:not-an-email:secret").is_empty());
        assert!(parse_seed_admins("").is_empty());
    }

    #[test]
    fn test_parse_seed_payment_methods() {
        let methods = parse_seed_payment_methods(DEFAULT_SEED_PAYMENT_METHODS);
        assert_eq!(
            methods,
            vec![
                SeedPaymentMethod {
                    name: "Bkash".to_string(),
                    details: "01700000000".to_string()
                },
                SeedPaymentMethod {
                    name: "Nagad".to_string(),
                    details: "01800000000".to_string()
                },
            ]
        );
        assert!(parse_seed_payment_methods(":missing-name").is_empty());
    }
}

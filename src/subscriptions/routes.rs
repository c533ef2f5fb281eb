// src/subscriptions/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the subscriptions router
///
/// # Routes
/// - `GET /api/payment-methods` - Methods a user can pay with
/// - `POST /api/premium/submit` - Submit a payment for review
pub fn subscriptions_routes() -> Router {
    Router::new()
        .route("/api/payment-methods", get(handlers::list_payment_methods))
        .route("/api/premium/submit", post(handlers::submit_for_premium))
}

// src/admin/routes.rs

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;

pub fn admin_routes() -> Router {
    Router::new()
        // Premium payment review
        .route(
            "/api/admin/payments",
            get(handlers::payments::list_pending_payments),
        )
        .route(
            "/api/admin/payments/:id/approve",
            post(handlers::payments::approve_payment),
        )
        .route(
            "/api/admin/payments/:id/reject",
            post(handlers::payments::reject_payment),
        )
        // User management
        .route("/api/admin/users", get(handlers::users::list_users))
        .route(
            "/api/admin/users/:id/subscription",
            put(handlers::users::update_user_subscription),
        )
        // Payment methods
        .route(
            "/api/admin/payment-methods",
            post(handlers::payment_methods::add_payment_method),
        )
        .route(
            "/api/admin/payment-methods/:id",
            delete(handlers::payment_methods::delete_payment_method),
        )
}

//! Authentication and session routes

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/auth/signup` - Create an account and open a session
/// - `POST /api/auth/signin` - Sign in and open a session
/// - `POST /api/auth/signout` - Clear the session
/// - `GET /api/me` - Current user
/// - `GET /api/session` - Session overview
/// - `PUT /api/session/language` - Change the session language
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/signin", post(handlers::signin))
        .route("/api/auth/signout", post(handlers::signout))
        .route("/api/me", get(handlers::me))
        .route("/api/session", get(handlers::session_overview))
        .route("/api/session/language", put(handlers::set_language))
}

// src/cooking/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the cooking timer router
///
/// # Routes
/// - `GET /api/timer` - Timer state, with a notice once a countdown finished
/// - `POST /api/timer/start` - Start (or replace) the countdown
/// - `POST /api/timer/pause` - Pause or resume
/// - `POST /api/timer/stop` - Stop and reset
pub fn cooking_routes() -> Router {
    Router::new()
        .route("/api/timer", get(handlers::get_timer))
        .route("/api/timer/start", post(handlers::start_timer))
        .route("/api/timer/pause", post(handlers::toggle_pause))
        .route("/api/timer/stop", post(handlers::stop_timer))
}

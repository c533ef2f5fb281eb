use axum::{routing::get, Router};

use super::handlers;

/// - `GET /api/i18n/:lang` - translation table for one language
pub fn i18n_routes() -> Router {
    Router::new().route("/api/i18n/:lang", get(handlers::get_translations))
}

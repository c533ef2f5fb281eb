//! Translation table lookup

use axum::extract::{Json, Path};
use serde_json::json;
use tracing::debug;

use super::{resolved_table, Language};
use crate::common::ApiError;

/// GET /api/i18n/:lang
/// Returns every key for the language, English filling any gaps
pub async fn get_translations(Path(lang): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let language: Language = lang
        .parse()
        .map_err(|e: String| ApiError::BadRequest(e))?;

    let entries = resolved_table(language);
    debug!(language = %language, keys = entries.len(), "Serving translation table");

    Ok(Json(json!({
        "language": language,
        "entries": entries,
    })))
}

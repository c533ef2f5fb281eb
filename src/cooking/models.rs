// src/cooking/models.rs

use serde::{Deserialize, Serialize};

use crate::common::Notice;
use crate::store::TimerState;

/// Longest countdown accepted, one day
pub const MAX_TIMER_SECONDS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerRequest {
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub recipe_title: Option<String>,
    pub seconds: i64,
}

#[derive(Debug, Serialize)]
pub struct TimerResponse {
    pub timer: TimerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

//! User-facing notifications attached to API responses
//!
//! AI calls never fail a request: they degrade to a neutral value plus a
//! notice the client shows as a toast.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A value together with the notice produced while computing it
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self { value, notice: None }
    }

    pub fn degraded(value: T, notice: Notice) -> Self {
        Self {
            value,
            notice: Some(notice),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(&self.notice, Some(n) if n.level == NoticeLevel::Error)
    }
}

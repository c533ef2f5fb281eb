//! # Store Module
//!
//! Per-session application state: the signed-in user, their collections,
//! generated recipes, the admin payment queue and the cooking timer.
//! Memory is the source of truth; persistence trails it through an ordered
//! write queue.

pub mod app_store;
pub mod persist;
pub mod registry;
pub mod state;
pub mod timer;

#[cfg(test)]
mod tests;

pub use app_store::AppStore;
pub use registry::SessionRegistry;
pub use state::{SessionSnapshot, SessionState};
pub use timer::{TimerFinished, TimerState};

use crate::services::mock_backend::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("not signed in")]
    NotSignedIn,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

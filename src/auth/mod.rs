//! # Auth Module
//!
//! Email/password accounts backed by the mock backend, session tokens and
//! the `AuthedSession` extractor that resolves a token to its live store.

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use extractors::AuthedSession;
pub use routes::auth_routes;

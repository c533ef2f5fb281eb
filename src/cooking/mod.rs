//! # Cooking Module
//!
//! HTTP surface of the per-session countdown timer used in cooking mode.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::cooking_routes;

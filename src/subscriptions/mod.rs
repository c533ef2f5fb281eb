//! # Subscriptions Module
//!
//! Manual premium upgrades: a user reports a payment, the account goes
//! `pending`, and an admin approves or rejects it from the admin module.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::subscriptions_routes;

//! # Recipes Module
//!
//! AI recipe generation and everything done with a recipe afterwards:
//! images, translation, saving, missing ingredients and cooking steps.
//! The meal planner and the store assistant live here as well.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::recipes_routes;

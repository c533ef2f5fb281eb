//! # Kitchen Module
//!
//! The signed-in user's pantry, shopping list and generation history.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::kitchen_routes;

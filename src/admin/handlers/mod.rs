// src/admin/handlers/mod.rs

pub mod payment_methods;
pub mod payments;
pub mod users;

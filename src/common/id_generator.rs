// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXXXX (e.g., R_K7NP3X2Q for recipes)
//!
//! Every record kept in the app document (users, payments, pantry rows, ...)
//! gets one of these. Session ids are UUIDs instead since they act as bearer
//! secrets.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const ID_LENGTH: usize = 8;

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Pending premium payment (P_)
    Payment,
    /// Payment method offered to users (PM_)
    PaymentMethod,
    /// Generated recipe (R_)
    Recipe,
    /// Pantry item (K_) - K for Kitchen
    PantryItem,
    /// Shopping list item (S_)
    ShoppingItem,
    /// Generation history entry (H_)
    History,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Payment => "P",
            EntityPrefix::PaymentMethod => "PM",
            EntityPrefix::Recipe => "R",
            EntityPrefix::PantryItem => "K",
            EntityPrefix::ShoppingItem => "S",
            EntityPrefix::History => "H",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// # Example
/// ```
/// let recipe_id = generate_id(EntityPrefix::Recipe);
/// // Returns something like "R_K7NP3X2Q"
/// ```
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(ID_LENGTH))
}

/// Generate a User ID (U_XXXXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate a Payment ID (P_XXXXXXXX)
pub fn generate_payment_id() -> String {
    generate_id(EntityPrefix::Payment)
}

/// Generate a Payment Method ID (PM_XXXXXXXX)
pub fn generate_payment_method_id() -> String {
    generate_id(EntityPrefix::PaymentMethod)
}

/// Generate a Recipe ID (R_XXXXXXXX)
pub fn generate_recipe_id() -> String {
    generate_id(EntityPrefix::Recipe)
}

/// Generate a Pantry Item ID (K_XXXXXXXX)
pub fn generate_pantry_item_id() -> String {
    generate_id(EntityPrefix::PantryItem)
}

/// Generate a Shopping List Item ID (S_XXXXXXXX)
pub fn generate_shopping_item_id() -> String {
    generate_id(EntityPrefix::ShoppingItem)
}

/// Generate a History ID (H_XXXXXXXX)
pub fn generate_history_id() -> String {
    generate_id(EntityPrefix::History)
}

/// Generate a session id
pub fn generate_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// src/services/mod.rs
//
// Shared services: local storage emulation, the mock backend over it and
// the AI gateway with its Gemini client

pub mod ai_gateway;
pub mod gemini;
pub mod local_storage;
pub mod mock_backend;

// Re-export commonly used types for convenience
pub use ai_gateway::AiGateway;
pub use gemini::{AiClient, GeminiService};
pub use local_storage::LocalStorage;
pub use mock_backend::{BackendError, MockBackend, UserDataUpdate};

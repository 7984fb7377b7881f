// src/api/mod.rs
// HTTP wrappers around the two collaborator services. Both are opaque to
// the core beyond their declared wire shapes; any other shape is failure.

pub mod advisor;
pub mod recognizer;

pub use advisor::{request_advice, ChatRequest, ChatResponse, ModelParams, MODEL_CATALOG};
pub use recognizer::{recognize_image, RecognitionData, RecognitionResponse};

/// Development default for the collaborator base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Collaborator base URL, `POKER_API_BASE` overriding the default.
pub fn api_base_url() -> String {
    std::env::var("POKER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

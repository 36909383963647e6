//! Google Gemini REST client library.
//!
//! Wraps the single `generateContent` call the enhancer makes, with
//! typed request/response bodies and error classification.

pub mod api;

pub use api::{GeminiApi, GeminiApiError};

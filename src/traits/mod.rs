//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`UserPrompt`] - Blocking confirm/alert dialogs

pub mod http;
pub mod prompt;

pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
pub use prompt::UserPrompt;
